//! Ingredient Check Common Library
//!
//! 成分表の読み込み・共通成分判定・レポート組み立て（I/Oなし）

pub mod csv;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod layout;
pub mod matrix;
pub mod report;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use evaluator::{evaluate, failing_products, is_approved, is_rejected, split_into_columns};
pub use layout::ReportLayout;
pub use matrix::load;
pub use report::{paginate, ExcludedEntry, Report, ReportHeader, ReportPage};
pub use session::Session;
pub use types::{Cell, EvaluationResult, Ingredient, Matrix, Selection};
