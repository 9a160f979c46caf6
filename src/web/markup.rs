// HTML fragments and class names for the DOM binding. Pure string building so
// it can be exercised natively.

use crate::game::{ConceptTile, DefinitionTile, FeedbackView};
use crate::relay::FeedbackKind;

pub const STYLE: &str = "
#cm-root { font-family: system-ui, sans-serif; direction: rtl; max-width: 72rem; margin: 0 auto; padding: 1.5rem; }
#cm-home { background:#2563eb; color:#fff; font-weight:700; padding:0.5rem 1.5rem; border:none; border-radius:0.5rem; cursor:pointer; }
.cm-header { text-align:center; margin:1.5rem 0 2rem; }
#cm-unit-title { font-size:1.9rem; color:#1f2937; margin:0 0 0.5rem; }
#cm-intro { font-size:1.1rem; color:#4b5563; }
#cm-level-name { font-size:1.25rem; font-weight:600; color:#2563eb; }
.cm-board { display:grid; grid-template-columns:1fr 1fr; gap:2rem; background:#fff; border-radius:0.5rem; box-shadow:0 4px 16px rgba(0,0,0,0.12); padding:1.5rem; }
.cm-column h2 { text-align:center; font-size:1.5rem; }
#cm-concepts-heading { color:#2563eb; }
#cm-definitions-heading { color:#ea580c; }
.cm-tile { height:80px; display:flex; align-items:center; justify-content:center; text-align:center; border:2px solid; border-radius:0.5rem; margin-bottom:0.75rem; transition:all 200ms; }
.cm-concept { background:#dbeafe; border-color:#93c5fd; font-weight:600; cursor:grab; }
.cm-definition { background:#ffedd5; border-color:#fdba74; }
.cm-matched { background:#dcfce7; border-color:#86efac; color:#6b7280; cursor:default; }
.cm-dragging { opacity:0.5; transform:rotate(3deg); }
.cm-highlighted { background:#bfdbfe; border-color:#60a5fa; transform:scale(1.05); }
.cm-feedback { position:fixed; top:50%; left:50%; transform:translate(-50%,-50%); background:#fff; border-radius:0.5rem; box-shadow:0 8px 24px rgba(0,0,0,0.2); padding:1.5rem; font-size:1.5rem; font-weight:700; z-index:50; transition:all 300ms ease-in-out; }
.cm-feedback.cm-fading { opacity:0; transform:translate(-50%,-66%); }
.cm-success { color:#16a34a; }
.cm-failure { color:#dc2626; }
.cm-modal { position:fixed; inset:0; background:rgba(0,0,0,0.5); display:flex; align-items:center; justify-content:center; z-index:60; }
.cm-modal[hidden], .cm-feedback[hidden] { display:none; }
.cm-modal-card { background:#fff; border-radius:0.5rem; padding:2rem; text-align:center; max-width:28rem; }
#cm-modal-title { font-size:1.5rem; font-weight:700; margin-bottom:1.5rem; }
#cm-modal-button { padding:1rem 2rem; font-size:1.25rem; font-weight:700; color:#fff; border:none; border-radius:0.5rem; cursor:pointer; }
#cm-modal-button.cm-next { background:#16a34a; }
#cm-modal-button.cm-home { background:#2563eb; }
";

/// Static page skeleton. Text is filled in by the renderer.
pub const SKELETON: &str = r#"
<div><button id="cm-home" data-action="home"></button></div>
<div class="cm-header">
  <h1 id="cm-unit-title"></h1>
  <p id="cm-intro"></p>
  <p id="cm-level-name"></p>
</div>
<div class="cm-board">
  <div class="cm-column"><h2 id="cm-concepts-heading"></h2><div id="cm-concepts"></div></div>
  <div class="cm-column"><h2 id="cm-definitions-heading"></h2><div id="cm-definitions"></div></div>
</div>
<div id="cm-feedback" class="cm-feedback" hidden></div>
<div id="cm-modal" class="cm-modal" hidden>
  <div class="cm-modal-card">
    <div id="cm-modal-title"></div>
    <button id="cm-modal-button" data-action="confirm"></button>
  </div>
</div>
"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn concept_id(index: usize) -> String {
    format!("cm-concept-{index}")
}

pub fn definition_id(index: usize) -> String {
    format!("cm-definition-{index}")
}

pub fn concept_class(tile: &ConceptTile) -> String {
    let mut class = String::from("cm-tile cm-concept");
    if tile.matched {
        class.push_str(" cm-matched");
    }
    if tile.dragging {
        class.push_str(" cm-dragging");
    }
    class
}

pub fn definition_class(tile: &DefinitionTile) -> String {
    let mut class = String::from("cm-tile cm-definition");
    if tile.matched {
        class.push_str(" cm-matched");
    }
    if tile.highlighted {
        class.push_str(" cm-highlighted");
    }
    class
}

pub fn feedback_class(feedback: &FeedbackView) -> String {
    let kind = match feedback.kind {
        FeedbackKind::Success => "cm-success",
        FeedbackKind::Failure => "cm-failure",
    };
    if feedback.fading {
        format!("cm-feedback {kind} cm-fading")
    } else {
        format!("cm-feedback {kind}")
    }
}

pub fn concept_tiles(tiles: &[ConceptTile]) -> String {
    tiles
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            format!(
                r#"<div id="{}" class="{}" data-role="concept" data-index="{i}" draggable="{}">{}</div>"#,
                concept_id(i),
                concept_class(tile),
                tile.draggable(),
                escape_html(&tile.text)
            )
        })
        .collect()
}

pub fn definition_tiles(tiles: &[DefinitionTile]) -> String {
    tiles
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            format!(
                r#"<div id="{}" class="{}" data-role="definition" data-index="{i}">{}</div>"#,
                definition_id(i),
                definition_class(tile),
                escape_html(&tile.text)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"H₂O" & 'salt'</b>"#),
            "&lt;b&gt;&quot;H₂O&quot; &amp; &#39;salt&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn matched_concept_is_not_draggable() {
        let html = concept_tiles(&[
            ConceptTile {
                text: "A".to_string(),
                matched: true,
                dragging: false,
            },
            ConceptTile {
                text: "B".to_string(),
                matched: false,
                dragging: true,
            },
        ]);
        assert!(html.contains(r#"id="cm-concept-0" class="cm-tile cm-concept cm-matched" data-role="concept" data-index="0" draggable="false">A<"#));
        assert!(html.contains(r#"class="cm-tile cm-concept cm-dragging" data-role="concept" data-index="1" draggable="true">B<"#));
    }

    #[test]
    fn highlighted_definition_gets_class() {
        let tile = DefinitionTile {
            text: "1".to_string(),
            matched: false,
            highlighted: true,
        };
        assert_eq!(definition_class(&tile), "cm-tile cm-definition cm-highlighted");
        assert!(definition_tiles(&[tile]).contains(r#"data-role="definition" data-index="0">1</div>"#));
    }

    #[test]
    fn fading_feedback_class() {
        let fb = FeedbackView {
            message: "x".to_string(),
            kind: FeedbackKind::Failure,
            fading: true,
        };
        assert_eq!(feedback_class(&fb), "cm-feedback cm-failure cm-fading");
    }
}
