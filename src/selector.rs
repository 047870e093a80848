//! 製品選択モジュール
//!
//! コマンドライン指定・全選択・対話式選択のいずれかでセッションの選択を組み立てる。

use crate::cli::SelectionArgs;
use crate::error::{IngredientCheckError, Result};
use dialoguer::MultiSelect;
use ingredient_check_common::{Error, Matrix, Session};

/// 引数に従って製品を選択（既存の選択は置き換える）
pub fn apply_selection(session: &mut Session, args: &SelectionArgs) -> Result<()> {
    session.clear_selection();

    if args.all {
        session.select_all()?;
    } else if args.interactive {
        let chosen = select_products_interactive(session)?;
        for product in chosen {
            session.select(&product)?;
        }
    } else {
        for product in &args.products {
            select_named(session, product)?;
        }
    }

    if session.selection().is_empty() {
        return Err(IngredientCheckError::Selection(
            "製品を1つ以上選択してください（-p / --all / --interactive）".into(),
        ));
    }

    log::debug!("選択製品: {}", session.selection().join(", "));
    Ok(())
}

/// 製品名で選択（不明な場合は大文字小文字違いの候補を提示）
fn select_named(session: &mut Session, product: &str) -> Result<()> {
    match session.select(product) {
        Err(Error::UnknownProduct(name)) => {
            let hint = session
                .matrix()
                .and_then(|m| suggest_product(m, &name))
                .map(|s| format!("（もしかして: {}）", s))
                .unwrap_or_default();
            Err(IngredientCheckError::Selection(format!("不明な製品: {}{}", name, hint)))
        }
        other => other.map_err(Into::into),
    }
}

/// 大文字小文字・前後空白を無視して一致する製品名を探す
pub fn suggest_product<'a>(matrix: &'a Matrix, name: &str) -> Option<&'a str> {
    let needle = name.trim().to_lowercase();
    matrix
        .products
        .iter()
        .find(|p| p.trim().to_lowercase() == needle)
        .map(|p| p.as_str())
}

/// 対話式で製品を選択（表示は名前順）
fn select_products_interactive(session: &Session) -> Result<Vec<String>> {
    let matrix = session.matrix().ok_or(Error::NoMatrix)?;
    let products = matrix.sorted_products();

    if products.is_empty() {
        return Err(IngredientCheckError::Selection("成分表に製品がありません".into()));
    }

    let chosen = MultiSelect::new()
        .with_prompt("判定する製品を選択してください（Space: 選択, Enter: 決定）")
        .items(&products)
        .interact()
        .map_err(|e| IngredientCheckError::Selection(e.to_string()))?;

    Ok(chosen.into_iter().map(|i| products[i].to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingredient_check_common::matrix::load_strings;
    use std::path::PathBuf;

    fn args(products: &[&str], all: bool) -> SelectionArgs {
        SelectionArgs {
            file: PathBuf::from("menu.csv"),
            sheet: None,
            products: products.iter().map(|s| s.to_string()).collect(),
            all,
            interactive: false,
        }
    }

    fn session() -> Session {
        let rows: Vec<Vec<_>> = vec![vec![None, Some("Cake".into()), Some("Bread".into())]];
        let mut session = Session::new();
        session.load(&rows).unwrap();
        session
    }

    #[test]
    fn test_apply_named_products() {
        let mut session = session();
        apply_selection(&mut session, &args(&["Cake"], false)).unwrap();
        assert_eq!(session.selection().join(","), "Cake");
    }

    #[test]
    fn test_apply_all() {
        let mut session = session();
        apply_selection(&mut session, &args(&[], true)).unwrap();
        assert_eq!(session.selection().join(","), "Bread,Cake");
    }

    #[test]
    fn test_apply_replaces_previous_selection() {
        let mut session = session();
        apply_selection(&mut session, &args(&[], true)).unwrap();
        session.evaluate().unwrap();

        apply_selection(&mut session, &args(&["Bread"], false)).unwrap();
        assert_eq!(session.selection().join(","), "Bread");
        assert!(session.result().is_none());
    }

    #[test]
    fn test_apply_nothing_is_error() {
        let mut session = session();
        let result = apply_selection(&mut session, &args(&[], false));
        assert!(matches!(result, Err(IngredientCheckError::Selection(_))));
    }

    #[test]
    fn test_unknown_product_suggestion() {
        let mut session = session();
        let err = apply_selection(&mut session, &args(&["cake"], false)).unwrap_err();
        assert!(err.to_string().contains("もしかして: Cake"));
    }

    #[test]
    fn test_suggest_product() {
        let matrix = load_strings(&[vec!["", " Bread "]]).unwrap();
        assert_eq!(suggest_product(&matrix, "bread"), Some(" Bread "));
        assert_eq!(suggest_product(&matrix, "cake"), None);
    }
}
