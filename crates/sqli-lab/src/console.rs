//! Interactive search loop for the `search` subcommand.

use std::io::Write;

use sqli_lab_core::present::render_search_results;
use sqli_lab_core::Catalog;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompt printed before each term.
pub const PROMPT: &str = "Enter product name to search (or type 'exit' to quit): ";

/// Returns true when the line ends the loop.
#[must_use]
pub fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit")
}

/// Reads terms from `input` until `exit` or EOF, printing both result sets
/// for each one to `out`.
pub async fn run<R, W>(catalog: &Catalog, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        writeln!(out, "\n--- Product Search ---")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(term) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if is_exit(&term) {
            break;
        }

        writeln!(out, "\nSearching for: '{term}' (Vulnerable Query)...")?;
        let vulnerable = catalog.search_unsafe(&term).await;
        writeln!(out, "{}", render_search_results(&vulnerable))?;

        writeln!(out, "\nSearching for: '{term}' (Safe Query)...")?;
        let safe = catalog.search_safe(&term).await;
        writeln!(out, "{}", render_search_results(&safe))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqli_lab_core::{CatalogConfig, NewProduct};

    async fn widget_catalog() -> (tempfile::TempDir, Catalog) {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(CatalogConfig::new(tmp.path().join("products.db")));
        catalog.init_schema().await.unwrap();
        catalog
            .insert(&NewProduct::new("Widget", "A test widget", 9.99))
            .await
            .unwrap();
        (tmp, catalog)
    }

    async fn transcript(catalog: &Catalog, input: &str) -> String {
        let mut out = Vec::new();
        run(catalog, input.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("Exit"));
        assert!(!is_exit("exit "));
        assert!(!is_exit("Widget"));
    }

    #[tokio::test]
    async fn test_plain_term_prints_both_searches() {
        let (_tmp, catalog) = widget_catalog().await;
        let text = transcript(&catalog, "Widget\nexit\n").await;

        assert!(text.contains("Searching for: 'Widget' (Vulnerable Query)..."));
        assert!(text.contains("Searching for: 'Widget' (Safe Query)..."));
        assert_eq!(
            text.matches("ID: 1, Name: Widget, Description: A test widget, Price: $9.99")
                .count(),
            2
        );
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[tokio::test]
    async fn test_payload_only_leaks_through_vulnerable_search() {
        let (_tmp, catalog) = widget_catalog().await;
        let text = transcript(&catalog, "' OR '1'='1\nEXIT\n").await;

        let (vulnerable, safe) = text
            .split_once("(Safe Query)...")
            .unwrap();
        assert!(vulnerable.contains("--- Products Found ---"));
        assert!(vulnerable.contains("Name: Widget"));
        assert!(safe.contains("No products found."));
        assert!(!safe.contains("Name: Widget"));
    }

    #[tokio::test]
    async fn test_eof_ends_loop() {
        let (_tmp, catalog) = widget_catalog().await;
        let text = transcript(&catalog, "").await;

        assert_eq!(text.matches(PROMPT).count(), 1);
        assert!(!text.contains("Searching for"));
    }
}
