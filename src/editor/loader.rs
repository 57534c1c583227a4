//! One-time setup of the editor machinery.
//!
//! Grammar compilation and stylesheet loading happen once per process, the
//! first time an editor binding needs the factory; every later caller gets
//! the cached result. The `Load` transition awaits this before any `bind()`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::OnceCell;

use crate::domain::SyntaxMode;

use super::highlight::{Grammar, Highlighter};
use super::EditorFactory;

/// Stylesheet applied to highlighted editor markup.
const HIGHLIGHT_STYLESHEET: &str = include_str!("../../assets/highlight.css");

static FACTORY: OnceCell<EditorFactory> = OnceCell::const_new();

/// The process-wide editor factory, built on first use.
///
/// Concurrent first callers share a single initialization; a failed
/// initialization is not cached, so the next call retries.
pub async fn editor_factory() -> Result<&'static EditorFactory> {
    FACTORY.get_or_try_init(build_factory).await
}

async fn build_factory() -> Result<EditorFactory> {
    // Grammar compilation is sync regex work; keep it off the event loop.
    let highlighter = tokio::task::spawn_blocking(build_highlighter)
        .await
        .context("editor setup task failed")??;
    Ok(EditorFactory::new(Arc::new(highlighter), HIGHLIGHT_STYLESHEET))
}

fn build_highlighter() -> Result<Highlighter> {
    let mut highlighter = Highlighter::new();
    highlighter.register(SyntaxMode::Json, Grammar::json().context("json grammar")?);
    highlighter.register(SyntaxMode::Css, Grammar::css().context("css grammar")?);
    highlighter.register(SyntaxMode::Plaintext, Grammar::plaintext());
    Ok(highlighter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn factory_is_built_once() {
        let first = editor_factory().await.unwrap();
        let second = editor_factory().await.unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn factory_carries_the_stylesheet() {
        let factory = editor_factory().await.unwrap();
        assert!(factory.stylesheet().contains(".hl-string"));
    }
}
