//! User-facing Messages
//!
//! Fixed strings shown in the error banner and inline validation.
//! Every remote failure of an operation maps to the same message.

pub const REFRESH_FAILED: &str = "タスクの取得に失敗しました。";
pub const CREATE_FAILED: &str = "タスクの作成に失敗しました。";
pub const UPDATE_FAILED: &str = "タスクの更新に失敗しました。";
pub const TOGGLE_FAILED: &str = "タスクの状態更新に失敗しました。";
pub const EDIT_FAILED: &str = "タスクの編集に失敗しました。";
pub const DELETE_FAILED: &str = "タスクの削除に失敗しました。";
pub const DELETE_ALL_FAILED: &str = "タスクの一括削除に失敗しました。";

/// Inline validation for the new-task input
pub const TITLE_REQUIRED: &str = "タスク名を入力してください。";

/// Shown in place of a missing timestamp
pub const NO_TIMESTAMP: &str = "-";
