//! Turns a parsed lesson into styled terminal lines.
//!
//! The same lines back both the plain-text output and the interactive
//! viewer; plain output just drops the styling.

use lessonmark_config::Config;
use lessonmark_engine::{
    BlockKind, DiagramOutcome, DiagramStatus, Disclosure, DisclosurePolicy, Document, InlineRun,
    TableOfContents, TocBuilder, parse_inline, parsing::blocks::kinds::CodeFence,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    pub toc: TocBuilder,
    pub disclosure: DisclosurePolicy,
    /// Show every block regardless of the disclosure decision.
    pub show_all: bool,
}

impl RenderSettings {
    pub fn from_config(config: &Config, show_all: bool) -> Self {
        Self {
            toc: TocBuilder::new(config.toc.min_headings),
            disclosure: DisclosurePolicy::new(
                config.disclosure.threshold_chars,
                config.disclosure.initial_blocks,
            ),
            show_all,
        }
    }
}

pub struct Rendered {
    pub lines: Vec<Line<'static>>,
    pub toc: Option<TableOfContents>,
    /// Line index of each rendered heading, by slug.
    pub anchors: Vec<(String, usize)>,
    pub disclosure: Disclosure,
}

impl Rendered {
    pub fn anchor(&self, slug: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, line)| *line)
    }
}

pub fn render(
    doc: &Document,
    input: &str,
    settings: &RenderSettings,
    diagrams: &[DiagramOutcome<Vec<String>>],
) -> Rendered {
    let disclosure = if settings.show_all {
        Disclosure::Full
    } else {
        settings.disclosure.decide_for_input(doc, input)
    };

    let mut lines = vec![];
    let mut anchors = vec![];
    for (index, block) in disclosure.visible_blocks(doc).iter().enumerate() {
        if let BlockKind::Heading { slug, .. } = &block.kind {
            anchors.push((slug.clone(), lines.len()));
        }
        let diagram = diagrams
            .iter()
            .find(|d| d.block_index == index)
            .map(|d| &d.status);
        render_block(&block.kind, diagram, &mut lines);
        lines.push(Line::default());
    }
    if lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    if let Disclosure::Collapsed { hidden, .. } = disclosure {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("… {hidden} more blocks hidden (press m, or pass --all)"),
            dim(),
        ));
    }

    Rendered {
        lines,
        toc: settings.toc.build(doc),
        anchors,
        disclosure,
    }
}

/// Unstyled text of a rendered document, with the contents list on top.
pub fn plain_lines(rendered: &Rendered) -> Vec<String> {
    let mut out = vec![];
    if let Some(toc) = &rendered.toc {
        out.push("Contents".to_string());
        for entry in &toc.entries {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(2)));
            out.push(format!("{indent}- {} (#{})", entry.text, entry.slug));
        }
        out.push(String::new());
    }
    out.extend(rendered.lines.iter().map(line_text));
    out
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn render_block(
    kind: &BlockKind,
    diagram: Option<&DiagramStatus<Vec<String>>>,
    out: &mut Vec<Line<'static>>,
) {
    match kind {
        BlockKind::Heading { level, text, .. } => {
            let mut spans = vec![Span::styled(
                format!("{} ", "#".repeat(usize::from(*level))),
                heading(),
            )];
            spans.extend(inline_spans(text, heading()));
            out.push(Line::from(spans));
        }
        BlockKind::Paragraph { text } => out.push(Line::from(inline_spans(text, Style::default()))),
        BlockKind::List { ordered, items } => {
            for (i, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                let mut spans = vec![Span::raw(marker)];
                spans.extend(inline_spans(item, Style::default()));
                out.push(Line::from(spans));
            }
        }
        BlockKind::Table { header, rows } => render_table(header, rows, out),
        BlockKind::BlockQuote { text } => {
            let mut spans = vec![Span::styled("│ ", dim())];
            spans.extend(inline_spans(
                text,
                Style::default().add_modifier(Modifier::ITALIC),
            ));
            out.push(Line::from(spans));
        }
        BlockKind::CodeFence { language, text } => render_fence(language, text, out),
        BlockKind::Diagram { text } => match diagram {
            Some(DiagramStatus::Rendered(lines)) => {
                out.extend(lines.iter().map(|l| Line::styled(l.clone(), code())));
            }
            Some(DiagramStatus::Failed) => out.push(Line::styled("[diagram unavailable]", dim())),
            None => render_fence(CodeFence::DIAGRAM_LANGUAGE, text, out),
        },
        BlockKind::Image { alt, src } => out.push(Line::from(vec![
            Span::styled(format!("[image: {alt}]"), link()),
            Span::styled(format!(" ({src})"), dim()),
        ])),
        BlockKind::HorizontalRule => out.push(Line::styled("─".repeat(40), dim())),
    }
}

fn render_fence(language: &str, text: &str, out: &mut Vec<Line<'static>>) {
    out.push(Line::styled(format!("```{language}"), dim()));
    out.extend(text.lines().map(|l| Line::styled(l.to_string(), code())));
    out.push(Line::styled("```", dim()));
}

fn render_table(header: &[String], rows: &[Vec<String>], out: &mut Vec<Line<'static>>) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header: Vec<Vec<Span<'static>>> = header.iter().map(|c| inline_spans(c, bold)).collect();
    let rows: Vec<Vec<Vec<Span<'static>>>> = rows
        .iter()
        .map(|r| r.iter().map(|c| inline_spans(c, Style::default())).collect())
        .collect();

    let columns = rows
        .iter()
        .map(Vec::len)
        .chain([header.len()])
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            std::iter::once(&header)
                .chain(rows.iter())
                .filter_map(|row| row.get(c))
                .map(|cell| visible_width(cell))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let row_line = |cells: &[Vec<Span<'static>>]| {
        let mut spans = vec![];
        for (c, &width) in widths.iter().enumerate() {
            if c > 0 {
                spans.push(Span::styled(" │ ", dim()));
            }
            let cell = cells.get(c).map_or(&[][..], Vec::as_slice);
            spans.extend(cell.iter().cloned());
            let pad = width.saturating_sub(visible_width(cell));
            if pad > 0 {
                spans.push(Span::raw(" ".repeat(pad)));
            }
        }
        trim_end_spans(&mut spans);
        Line::from(spans)
    };

    out.push(row_line(header.as_slice()));
    let rule = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    out.push(Line::styled(rule, dim()));
    out.extend(rows.iter().map(|r| row_line(r.as_slice())));
}

fn visible_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.chars().count()).sum()
}

/// Drops trailing whitespace, including padding and a dangling separator
/// space after an empty last cell.
fn trim_end_spans(spans: &mut Vec<Span<'static>>) {
    while let Some(last) = spans.last_mut() {
        let trimmed = last.content.trim_end();
        if trimmed.is_empty() {
            spans.pop();
        } else {
            if trimmed.len() != last.content.len() {
                last.content = trimmed.to_string().into();
            }
            break;
        }
    }
}

fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    parse_inline(text)
        .into_iter()
        .flat_map(|run| match run {
            InlineRun::Literal { text } => vec![Span::styled(text, base)],
            InlineRun::Bold { text } => vec![Span::styled(text, base.add_modifier(Modifier::BOLD))],
            InlineRun::Italic { text } => {
                vec![Span::styled(text, base.add_modifier(Modifier::ITALIC))]
            }
            InlineRun::Code { text } => vec![Span::styled(text, code())],
            InlineRun::Link { text, href } => vec![
                Span::styled(text, link()),
                Span::styled(format!(" <{href}>"), dim()),
            ],
        })
        .collect()
}

fn heading() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn code() -> Style {
    Style::default().fg(Color::Yellow)
}

fn link() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}
