// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Structured-result renderer: summary statistics, ranked keywords, flagged
// terms with suggestions. Sections with no content are omitted rather than
// rendered empty.

use dioxus::prelude::*;

use blattwerk_client::AnalysisReport;

use crate::theme::Palette;

/// How many ranked keywords are shown.
const KEYWORD_LIMIT: usize = 10;
/// How many flagged terms are shown.
const FLAGGED_LIMIT: usize = 20;

#[component]
pub fn AnalysisView(report: AnalysisReport, palette: Palette) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 16px;",
            // Summary statistics
            div { style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 8px;",
                StatTile { label: "Total words", value: report.total_words, palette }
                StatTile { label: "Unique words", value: report.unique_words, palette }
                StatTile { label: "Pages", value: report.pages, palette }
            }

            // Ranked keywords
            if !report.top_keywords.is_empty() {
                div {
                    h4 { style: "margin: 0 0 8px 0;", "Top keywords" }
                    for (index, kw) in report.top_keywords.iter().take(KEYWORD_LIMIT).enumerate() {
                        {
                            let rank = index + 1;
                            rsx! {
                                div {
                                    key: "{kw.word}",
                                    style: "display: flex; justify-content: space-between; padding: 6px 10px; border-bottom: 1px solid {palette.border}; font-size: 14px;",
                                    span { "{rank}. {kw.word}" }
                                    span { style: "color: {palette.muted};", "{kw.count}" }
                                }
                            }
                        }
                    }
                }
            }

            // Flagged terms, or the notice that flagging was unavailable
            if !report.spell_checker_available {
                p { style: "color: {palette.muted}; font-size: 14px; font-style: italic;",
                    "Spell checking was not available on the service, so no terms were flagged."
                }
            } else if !report.typos.is_empty() {
                div {
                    h4 { style: "margin: 0 0 8px 0;", "Possible spelling issues" }
                    for term in report.typos.iter().take(FLAGGED_LIMIT) {
                        {
                            let suggestions = term.suggestions.join(", ");
                            rsx! {
                                div {
                                    key: "{term.incorrect}",
                                    style: "padding: 6px 10px; border-bottom: 1px solid {palette.border}; font-size: 14px;",
                                    span { style: "font-weight: bold;", "{term.incorrect}" }
                                    if !suggestions.is_empty() {
                                        span { style: "color: {palette.muted};", "  try: {suggestions}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: u64, palette: Palette) -> Element {
    rsx! {
        div { style: "padding: 12px; border: 1px solid {palette.border}; border-radius: 10px; background: {palette.card_bg}; text-align: center;",
            p { style: "margin: 0; font-size: 22px; font-weight: bold;", "{value}" }
            p { style: "margin: 0; font-size: 12px; color: {palette.muted};", "{label}" }
        }
    }
}
