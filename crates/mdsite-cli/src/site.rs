//! Site build steps: clear the output, copy static files, generate pages.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::{CliError, Result};

/// Files never copied to the output
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Build the whole site described by `config`. Returns the number of pages generated.
pub(crate) fn build(config: &SiteConfig) -> Result<usize> {
    clear_dir(&config.public_dir)?;
    copy_dir(&config.static_dir, &config.public_dir)?;

    let template = read(&config.template)?;
    generate_pages(&config.content_dir, &template, &config.public_dir)
}

/// Empty `dir`, creating it if it does not exist
pub(crate) fn clear_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        info!(dir = %dir.display(), "creating output directory");
        return fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e));
    }

    info!(dir = %dir.display(), "deleting directory contents");
    for entry in fs::read_dir(dir).map_err(|e| CliError::io(dir, e))? {
        let path = entry.map_err(|e| CliError::io(dir, e))?.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| CliError::io(&path, e))?;
    }
    Ok(())
}

/// Recursively copy the contents of `src` into `dst`
pub(crate) fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| CliError::io(dst, e))?;

    for entry in fs::read_dir(src).map_err(|e| CliError::io(src, e))? {
        let entry = entry.map_err(|e| CliError::io(src, e))?;
        let name = entry.file_name();
        if IGNORED_FILES.iter().any(|ignored| name == *ignored) {
            continue;
        }

        let from = entry.path();
        let to = dst.join(&name);
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            info!(from = %from.display(), to = %to.display(), "copying file");
            fs::copy(&from, &to).map_err(|e| CliError::io(&from, e))?;
        }
    }
    Ok(())
}

/// Generate an HTML page for every `.md` file under `content_dir`.
///
/// Output paths mirror the content tree, with `.md` replaced by `.html`.
pub(crate) fn generate_pages(content_dir: &Path, template: &str, public_dir: &Path) -> Result<usize> {
    let mut generated = 0;
    let mut pending = vec![content_dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).map_err(|e| CliError::io(&dir, e))? {
            let path = entry.map_err(|e| CliError::io(&dir, e))?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension() != Some(OsStr::new("md")) {
                debug!(path = %path.display(), "skipping non-markdown file");
                continue;
            }

            let relative = path.strip_prefix(content_dir).map_err(|_| {
                CliError::InvalidPath(format!(
                    "{} is outside {}",
                    path.display(),
                    content_dir.display()
                ))
            })?;
            let dest = public_dir.join(relative).with_extension("html");
            generate_page(&path, template, &dest)?;
            generated += 1;
        }
    }

    Ok(generated)
}

/// Render one Markdown file into `template` and write it to `dest`
pub(crate) fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<()> {
    info!(from = %from.display(), to = %dest.display(), "generating page");

    let markdown = read(from)?;
    let page = mdsite::generate_page(&markdown, template).map_err(|e| CliError::markdown(from, e))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| CliError::io(dest, e))
}

/// Render one Markdown file to an HTML fragment
pub(crate) fn render_file(path: &Path) -> Result<String> {
    let markdown = read(path)?;
    mdsite::render_markdown(&markdown).map_err(|e| CliError::markdown(path, e))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}
