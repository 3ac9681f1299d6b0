//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::{Config, Result};

/// Removes an expense by id.
///
/// Removing an id that does not exist is not an error; the outcome is reported in the message.
pub async fn delete(config: Config, args: DeleteArgs) -> Result<Out<String>> {
    let repository = config.repository();
    let before = repository.load().await.len();
    let remaining = repository.delete(args.id()).await?;

    let message = if remaining.len() == before {
        format!("No expense found with id '{}', nothing deleted", args.id())
    } else {
        format!("Deleted expense {}", args.id())
    };
    Ok(Out::new(message, args.id().to_string()))
}
