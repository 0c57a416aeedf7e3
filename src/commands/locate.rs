use anyhow::Result;
use cursor_launch::{locator::Locator, Config, Error};

use super::warn_not_found;

pub fn cmd_locate() -> Result<()> {
    let config = Config::load()?;
    let locator = Locator::new(&config.cursor);
    match locator.locate() {
        Ok(path) => println!("{}", path.display()),
        Err(Error::NotFound { searched }) => {
            warn_not_found(&searched);
            if locator.searches_path() {
                tracing::debug!("searched PATH for `cursor`");
            }
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
