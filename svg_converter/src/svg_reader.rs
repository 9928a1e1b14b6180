// svg_reader.rs - Pulls wall segments out of a maze drawing
//
// Expected layout, as written by common maze generators:
//
//   <svg ...>
//     <g ...>
//       <line x1="2" y1="2" x2="66" y2="2" />
//       ...
//     </g>
//   </svg>

use maze_core::{MazeError, RawSegment};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error_handling::{ConvertError, Result};

const GROUP_TAG: &str = "g";
const LINE_TAG: &str = "line";

/// Every `<line>` directly inside the first top-level `<g>`, in document order
pub fn read_line_segments(svg: &str) -> Result<Vec<RawSegment>> {
    // maze generators usually emit an SVG doctype
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(svg, options)?;

    let group = child_elements(doc.root_element(), GROUP_TAG)
        .next()
        .ok_or(ConvertError::MissingGroup)?;

    let segments = child_elements(group, LINE_TAG)
        .map(parse_line)
        .collect::<std::result::Result<Vec<_>, MazeError>>()?;

    log::debug!("Read {} line segments", segments.len());
    Ok(segments)
}

fn child_elements<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    parent
        .children()
        .filter(move |node| node.is_element() && node.tag_name().name().eq_ignore_ascii_case(tag))
}

fn parse_line(line: Node<'_, '_>) -> std::result::Result<RawSegment, MazeError> {
    Ok(RawSegment::new(
        int_attribute(line, "x1")?,
        int_attribute(line, "y1")?,
        int_attribute(line, "x2")?,
        int_attribute(line, "y2")?,
    ))
}

fn int_attribute(line: Node<'_, '_>, name: &str) -> std::result::Result<i32, MazeError> {
    let raw = line
        .attribute(name)
        .ok_or_else(|| MazeError::malformed(format!("line element is missing \"{name}\"")))?;
    raw.trim().parse().map_err(|_| {
        MazeError::malformed(format!("attribute {name}=\"{raw}\" is not an integer"))
    })
}
