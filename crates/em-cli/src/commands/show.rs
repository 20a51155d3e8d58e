//! Show command implementation

use anyhow::{bail, Result};
use em_core::Direction;

use crate::cli::{GlobalArgs, ShowArgs};
use crate::commands::common::{discover, find_by_id, open_source};

/// Execute the show command
pub(crate) fn execute(args: &ShowArgs, global: &GlobalArgs) -> Result<()> {
    let source = open_source(global)?;
    let migrations = discover(&source)?;

    let Some(migration) = find_by_id(&migrations, &args.id, source.suffix()) else {
        bail!(
            "Migration '{}' not found in '{}' ({} migrations)",
            args.id,
            source.dir(),
            migrations.len()
        );
    };

    let directions = match args.direction {
        Some(arg) => vec![Direction::from(arg)],
        None => vec![Direction::Up, Direction::Down],
    };

    print!("{}", source.parser().render(migration, &directions));
    Ok(())
}
