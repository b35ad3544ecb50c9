use lessonmark_engine::{DiagramError, DiagramRenderer};

/// Diagram types the text renderer recognises on a diagram's first line.
const DIAGRAM_TYPES: [&str; 12] = [
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "gantt",
    "pie",
    "journey",
    "mindmap",
    "timeline",
];

/// Renders diagrams as labelled, indented source for terminal output.
pub struct TextDiagramRenderer;

impl DiagramRenderer for TextDiagramRenderer {
    type Artifact = Vec<String>;

    fn render(&self, source: &str) -> Result<Vec<String>, DiagramError> {
        let mut lines = source.lines().filter(|l| !l.trim().is_empty());
        let Some(header) = lines.next() else {
            return Err(DiagramError::EmptySource);
        };
        let kind = header.split_whitespace().next().unwrap_or_default();
        if !DIAGRAM_TYPES.contains(&kind) {
            return Err(DiagramError::Syntax(format!("unknown diagram type '{kind}'")));
        }

        let mut out = vec![format!("┌ diagram: {}", header.trim())];
        out.extend(lines.map(|l| format!("│ {}", l.trim())));
        out.push("└".to_string());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_known_diagram() {
        let out = TextDiagramRenderer.render("graph TD\n  A --> B\n\n  B --> C").unwrap();
        assert_eq!(
            out,
            vec!["┌ diagram: graph TD", "│ A --> B", "│ B --> C", "└"]
        );
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert!(matches!(
            TextDiagramRenderer.render("digraph { a -> b }"),
            Err(DiagramError::Syntax(_))
        ));
        assert_eq!(
            TextDiagramRenderer.render("  \n"),
            Err(DiagramError::EmptySource)
        );
    }
}
