//! Clear command handler.

use crate::commands::Out;
use crate::{Config, Result};

/// Removes the entire stored expense collection.
pub async fn clear(config: Config) -> Result<Out<String>> {
    config.repository().clear().await?;
    Ok(Out::new_message("Removed all expenses"))
}
