//! Chart row classification
//!
//! The chart table mixes song rows with advertisement slots and decorative
//! rows. Only song rows are counted and extracted.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

static AD_MARKER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".adspace").expect("invalid selector: ad marker"));

/// Whether a table row holds a chart entry.
///
/// Rows containing an ad slot are rejected; otherwise a row is accepted only
/// when it has no (or an empty) `class` attribute.
pub fn is_chart_row(row: ElementRef<'_>) -> bool {
    if row.select(&AD_MARKER).next().is_some() {
        return false;
    }

    row.value().attr("class").unwrap_or_default().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn rows(html: &str) -> Vec<bool> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("tr").unwrap();
        document.select(&selector).map(is_chart_row).collect()
    }

    #[test]
    fn test_plain_row_accepted() {
        let html = r#"<table><tbody>
            <tr><td class="position">1</td></tr>
            <tr class=""><td class="position">2</td></tr>
        </tbody></table>"#;

        assert_eq!(rows(html), vec![true, true]);
    }

    #[test]
    fn test_classed_row_rejected() {
        let html = r#"<table><tbody>
            <tr class="headings"><th>Pos</th></tr>
            <tr class="mobile-actions"><td>share</td></tr>
        </tbody></table>"#;

        assert_eq!(rows(html), vec![false, false]);
    }

    #[test]
    fn test_ad_row_rejected_regardless_of_class() {
        let html = r#"<table><tbody>
            <tr><td><div class="adspace">ad</div></td></tr>
            <tr class="promo"><td><div class="adspace">ad</div></td></tr>
            <tr><td><span><i class="icon adspace"></i></span></td></tr>
        </tbody></table>"#;

        assert_eq!(rows(html), vec![false, false, false]);
    }
}
