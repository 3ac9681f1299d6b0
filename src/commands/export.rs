//! Export command handler.

use crate::args::ExportArgs;
use crate::commands::{parse_filters, Out};
use crate::export::{export_filename, to_csv, write_export};
use crate::filter::filter;
use crate::{Config, Result};
use chrono::Utc;
use std::path::PathBuf;

/// Writes the (optionally filtered) expenses to a CSV file.
///
/// The rows are written most recent first, matching the list order. Without `--output` the file
/// is written to the working directory as `expenses-<today>.csv`.
pub async fn export(config: Config, args: ExportArgs) -> Result<Out<String>> {
    let filters = parse_filters(args.filters())?;
    let expenses = config.repository().load().await;
    let matched = filter(&expenses, &filters);
    let text = to_csv(&matched);

    let path = match args.output() {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_filename(Utc::now().date_naive())),
    };
    write_export(&path, &text).await?;

    let message = format!(
        "Exported {} expense(s) to '{}'",
        matched.len(),
        path.display()
    );
    Ok(Out::new(message, path.display().to_string()))
}
