//! HTML rendering of the directory page.
//!
//! Every piece implements [`fmt::Display`]; text coming from the catalog or
//! from the request goes through [`Escaped`].

use std::fmt;

use crate::{
    data::Operator,
    listing::{ListingQuery, SortOrder},
    suggestion::{Acknowledgement, SuggestionForm},
};

/// HTML-escaped text.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, c) in self.0.char_indices() {
            let entity = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                _ => continue,
            };
            f.write_str(&self.0[last..i])?;
            f.write_str(entity)?;
            last = i + c.len_utf8();
        }
        f.write_str(&self.0[last..])
    }
}

pub struct OperatorCard<'a> {
    pub operator: &'a Operator,
    pub asset_base: &'a str,
}

impl fmt::Display for OperatorCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operator;
        writeln!(f, r#"<article class="operator-card" id="op-{}">"#, Escaped(&op.id))?;
        writeln!(
            f,
            r#"<img class="logo" src="{}/{}.png" alt="{} logo">"#,
            Escaped(self.asset_base.trim_end_matches('/')),
            Escaped(&op.logo_id),
            Escaped(&op.name)
        )?;
        writeln!(f, "<h2>{}</h2>", Escaped(&op.name))?;
        writeln!(
            f,
            r#"<p class="rating">{:.1} <span>({} reviews)</span></p>"#,
            op.average_rating(),
            op.review_count()
        )?;
        writeln!(f, r#"<p class="hq">{}</p>"#, Escaped(&op.hq))?;
        if op.has_known_fleet_size() {
            writeln!(f, r#"<p class="fleet">Fleet size: {}</p>"#, op.fleet_size)?;
        } else {
            writeln!(f, r#"<p class="fleet">Fleet size: Unknown</p>"#)?;
        }
        writeln!(f, r#"<p class="description">{}</p>"#, Escaped(&op.description))?;
        writeln!(
            f,
            r#"<a href="{}" rel="noopener">Visit website</a>"#,
            Escaped(&op.website)
        )?;
        writeln!(f, "</article>")
    }
}

/// The whole directory page: controls, result grid, suggestion form.
pub struct DirectoryPage<'a> {
    pub query: &'a ListingQuery,
    pub operators: &'a [&'a Operator],
    pub suggestion: &'a SuggestionForm,
    pub acknowledgement: Option<&'a Acknowledgement>,
    pub asset_base: &'a str,
}

impl DirectoryPage<'_> {
    fn controls(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<form class="controls" method="get" action="/">"#)?;
        writeln!(
            f,
            r#"<input type="search" name="search" placeholder="Search operators..." value="{}">"#,
            Escaped(&self.query.search)
        )?;
        writeln!(f, r#"<label>Sort by: <select name="sort">"#)?;
        for sort in SortOrder::ALL {
            let selected = if sort == self.query.sort { " selected" } else { "" };
            writeln!(
                f,
                r#"<option value="{}"{selected}>{}</option>"#,
                sort.as_str(),
                sort.label()
            )?;
        }
        writeln!(f, "</select></label>")?;
        writeln!(f, r#"<button type="submit">Apply</button>"#)?;
        writeln!(f, "</form>")
    }

    fn results(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operators.is_empty() {
            writeln!(f, r#"<div class="no-results">"#)?;
            writeln!(f, "<h3>No Operators Found</h3>")?;
            writeln!(f, "<p>Try adjusting your search terms.</p>")?;
            return writeln!(f, "</div>");
        }

        writeln!(f, r#"<div class="operator-grid">"#)?;
        for &operator in self.operators {
            write!(
                f,
                "{}",
                OperatorCard {
                    operator,
                    asset_base: self.asset_base,
                }
            )?;
        }
        writeln!(f, "</div>")
    }

    fn suggestion(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<section class="suggestion">"#)?;
        if let Some(ack) = self.acknowledgement {
            writeln!(
                f,
                r#"<div class="toast" role="status"><strong>{}</strong> {}</div>"#,
                Escaped(&ack.title),
                Escaped(&ack.description)
            )?;
        }
        writeln!(f, "<h3>Don't see an operator?</h3>")?;
        writeln!(
            f,
            "<p>If you know of an operator not on our list, please suggest them below. \
             We'll review and add them to our directory.</p>"
        )?;
        writeln!(f, r#"<form method="post" action="/suggestions">"#)?;
        // keep the listing as it is across the post
        writeln!(
            f,
            r#"<input type="hidden" name="search" value="{}">"#,
            Escaped(&self.query.search)
        )?;
        writeln!(
            f,
            r#"<input type="hidden" name="sort" value="{}">"#,
            self.query.sort.as_str()
        )?;
        writeln!(
            f,
            r#"<input type="text" name="suggestion" placeholder="Enter operator name..." value="{}" required>"#,
            Escaped(&self.suggestion.text)
        )?;
        writeln!(f, r#"<button type="submit">Suggest Operator</button>"#)?;
        writeln!(f, "</form>")?;
        writeln!(f, "</section>")
    }
}

impl fmt::Display for DirectoryPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, r#"<head><meta charset="utf-8"><title>Private Jet Operators</title></head>"#)?;
        writeln!(f, "<body>")?;
        writeln!(f, "<main>")?;
        self.controls(f)?;
        self.results(f)?;
        self.suggestion(f)?;
        writeln!(f, "</main>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}
