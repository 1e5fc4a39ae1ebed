//! atl add コマンド
//!
//! フォーム入力を検証し、重複を警告したうえでストアに1件追加する。
//! ストアへの送信に失敗した場合は入力を下書きとして保存し、
//! `--retry` で再送できるようにする。

use super::{describe, Context};
use crate::catalog::{
    check_duplicates, prepare, FormInput, NewToolRecord, SubmissionWarning, ValidationErrors,
};
use crate::draft::Draft;
use crate::error::AtlError;
use crate::output::{error_line, success_line, warning_line};
use crate::store::CatalogStore;
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(after_help = "EXAMPLES:\n  atl add --name Perplexity --description \"Answer engine\" \\\n          --link https://perplexity.ai --category Research --tags \"search, answers\"\n  atl add --retry                Resend the draft saved after a failed submission")]
pub struct Args {
    /// Tool name
    #[arg(long)]
    pub name: Option<String>,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Tool URL (http:// or https://)
    #[arg(long)]
    pub link: Option<String>,

    /// Category (existing or new)
    #[arg(long)]
    pub category: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Pricing text (e.g. "Free", "Freemium", "$20/mo")
    #[arg(long)]
    pub pricing: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Validate and print the record without submitting
    #[arg(long)]
    pub dry_run: bool,

    /// Start from the draft saved after a failed submission
    #[arg(long)]
    pub retry: bool,
}

impl Args {
    /// フォーム入力を組み立てる（明示したオプションが下書きより優先）
    fn into_form(self, draft: Option<FormInput>) -> FormInput {
        let base = draft.unwrap_or_default();
        FormInput {
            name: self.name.unwrap_or(base.name),
            description: self.description.unwrap_or(base.description),
            link: self.link.unwrap_or(base.link),
            category: self.category.unwrap_or(base.category),
            tags: self.tags.unwrap_or(base.tags),
            pricing: self.pricing.unwrap_or(base.pricing),
            notes: self.notes.unwrap_or(base.notes),
        }
    }
}

/// 送信結果
#[derive(Debug)]
pub struct SubmitReport {
    pub record: NewToolRecord,
    pub warnings: Vec<SubmissionWarning>,
    /// 重複チェック用の読み込みに失敗した場合の理由
    pub duplicate_check_skipped: Option<String>,
    pub dry_run: bool,
}

/// 送信失敗
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 検証エラー（重複警告は検証結果とは独立に算出する）
    #[error("Validation failed: {errors}")]
    Invalid {
        errors: ValidationErrors,
        warnings: Vec<SubmissionWarning>,
    },

    #[error("Failed to add tool: {0}")]
    Store(AtlError),
}

/// 重複警告 → 検証 → 追加 の一連の処理
///
/// 検証エラーがあれば追加は行わない。
/// 送信がストア側で失敗した場合は `draft` に入力を退避し、成功時は削除する。
pub async fn submit(
    store: &dyn CatalogStore,
    form: &FormInput,
    draft: Option<&Draft>,
    dry_run: bool,
) -> Result<SubmitReport, SubmitError> {
    // 1. 重複警告（検証の成否に関係なく算出）
    let (warnings, duplicate_check_skipped) = duplicate_warnings(store, form).await;

    // 2. 検証
    let record = match prepare(form) {
        Ok(record) => record,
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields(), "validation failed");
            return Err(SubmitError::Invalid { errors, warnings });
        }
    };

    if dry_run {
        return Ok(SubmitReport {
            record,
            warnings,
            duplicate_check_skipped,
            dry_run: true,
        });
    }

    // 3. 追加
    match store.insert(&record).await {
        Ok(()) => {
            tracing::info!(name = %record.name, category = %record.category, "tool added");
            if let Some(draft) = draft {
                if let Err(e) = draft.clear() {
                    tracing::warn!(error = %e, "failed to remove draft");
                }
            }
            Ok(SubmitReport {
                record,
                warnings,
                duplicate_check_skipped,
                dry_run: false,
            })
        }
        Err(e) => {
            if e.is_store_failure() {
                if let Some(draft) = draft {
                    match draft.save(form) {
                        Ok(()) => tracing::debug!(path = %draft.path().display(), "draft saved"),
                        Err(save_err) => tracing::warn!(error = %save_err, "failed to save draft"),
                    }
                }
            }
            Err(SubmitError::Store(e))
        }
    }
}

/// 既存レコードとの重複警告
///
/// name と category がどちらも空でないときだけ読み込む。
/// 読み込み失敗は送信を妨げず、理由だけを返す。
async fn duplicate_warnings(
    store: &dyn CatalogStore,
    form: &FormInput,
) -> (Vec<SubmissionWarning>, Option<String>) {
    if form.name.trim().is_empty() || form.category.trim().is_empty() {
        return (Vec::new(), None);
    }
    match store.load_all().await {
        Ok(records) => (check_duplicates(form, &records), None),
        Err(e) => {
            tracing::warn!(error = %e, "duplicate check skipped");
            (Vec::new(), Some(e.to_string()))
        }
    }
}

pub async fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let draft = match Draft::default_location() {
        Ok(draft) => Some(draft),
        Err(e) => {
            tracing::warn!(error = %e, "drafts disabled");
            None
        }
    };

    let retry = args.retry;
    let dry_run = args.dry_run;
    let saved = if retry {
        let draft = draft
            .as_ref()
            .ok_or_else(|| "Cannot locate the draft file (HOME is not set)".to_string())?;
        let saved = draft.load().map_err(describe)?;
        if saved.is_none() {
            return Err("No saved draft to retry".to_string());
        }
        saved
    } else {
        None
    };
    let form = args.into_form(saved);

    let store = ctx.store()?;
    match submit(store.as_ref(), &form, draft.as_ref(), dry_run).await {
        Ok(report) => {
            print_report(&report)?;
            Ok(())
        }
        Err(SubmitError::Invalid { errors, warnings }) => {
            print_warnings(&warnings, None);
            for (field, message) in errors.iter() {
                eprintln!("{}", error_line(&format!("{}: {}", field, message)));
            }
            Err(format!(
                "Validation failed: {} field(s) need attention",
                errors.len()
            ))
        }
        Err(SubmitError::Store(e)) => {
            let saved = e.is_store_failure() && draft.is_some();
            let mut message = format!("Failed to add tool: {}", describe(e));
            if saved {
                message.push_str("\n  Your input was saved; run `atl add --retry` to resend it");
            }
            Err(message)
        }
    }
}

/// 送信をブロックしない警告を表示
fn print_warnings(warnings: &[SubmissionWarning], skipped: Option<&str>) {
    if let Some(reason) = skipped {
        eprintln!(
            "{}",
            warning_line(&format!("Could not check for duplicates: {}", reason))
        );
    }
    for warning in warnings {
        eprintln!("{}", warning_line(&warning.to_string()));
    }
}

fn print_report(report: &SubmitReport) -> Result<(), String> {
    print_warnings(&report.warnings, report.duplicate_check_skipped.as_deref());

    if report.dry_run {
        let json = serde_json::to_string_pretty(&report.record)
            .map_err(|e| format!("Failed to serialize tool: {}", e))?;
        println!("{json}");
        eprintln!("{}", success_line("Validation passed (dry run, nothing submitted)"));
    } else {
        println!(
            "{}",
            success_line(&format!(
                "Added \"{}\" to {}",
                report.record.name, report.record.category
            ))
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
