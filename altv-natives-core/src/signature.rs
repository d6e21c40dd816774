//! Rendering of a single native into a documented TypeScript signature.

use std::fmt;

use crate::catalog::{NativeEntry, Param};
use crate::error::CatalogError;
use crate::mode::GenerationMode;
use crate::naming::normalize;
use crate::types::TypeMap;

const VOID: &str = "void";
const INDENT: &str = "  ";

/// A native ready to be placed inside the module block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNative {
    /// Normalized (lowerCamelCase) function name.
    pub name: String,
    /// Block comment including its indentation, without trailing newline.
    pub comment: Option<String>,
    /// `  export function ...;` line.
    pub signature: String,
}

impl fmt::Display for RenderedNative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "{comment}")?;
        }
        f.write_str(&self.signature)
    }
}

/// Render one catalog entry.
///
/// Fails with [`CatalogError::Format`] when the `results` string does not
/// have the `T` / `[T1, T2]` shape.
pub fn synthesize(
    entry: &NativeEntry,
    types: &TypeMap,
    mode: GenerationMode,
) -> Result<RenderedNative, CatalogError> {
    let name = normalize(&entry.name);
    let result = render_results(&entry.results, types, mode)
        .map_err(|reason| CatalogError::format(&entry.name, &entry.results, reason))?;
    let params = render_params(&entry.params, types).join(", ");

    Ok(RenderedNative {
        signature: format!("{INDENT}export function {name}({params}): {result};"),
        comment: render_comment(&entry.comment, mode),
        name,
    })
}

/// Render the return type of a native.
///
/// Returns the reason string on malformed input so the caller can attach
/// the native's name.
pub fn render_results(
    results: &str,
    types: &TypeMap,
    mode: GenerationMode,
) -> Result<String, &'static str> {
    let pieces = split_results(results)?;
    let mut resolved: Vec<&str> = pieces.into_iter().map(|p| types.resolve(p)).collect();

    if !mode.template().keep_void_result && resolved.first() == Some(&VOID) {
        resolved.remove(0);
    }

    Ok(match resolved.as_slice() {
        [] => VOID.to_string(),
        [single] => single.to_string(),
        many => format!("[{}]", many.join(", ")),
    })
}

fn split_results(results: &str) -> Result<Vec<&str>, &'static str> {
    let (inner, bracketed) = match results.strip_prefix('[') {
        Some(rest) => (
            rest.strip_suffix(']').ok_or("missing closing bracket")?,
            true,
        ),
        None if results.ends_with(']') => return Err("missing opening bracket"),
        None => (results, false),
    };

    if inner.is_empty() {
        return if bracketed {
            Ok(Vec::new())
        } else {
            Err("empty result type")
        };
    }

    inner
        .split(", ")
        .map(|piece| {
            if piece.is_empty() {
                Err("empty result type")
            } else if piece.contains(['[', ']']) {
                Err("nested brackets")
            } else if piece.contains(',') {
                Err("result types must be separated by \", \"")
            } else if piece.trim() != piece {
                Err("stray whitespace around result type")
            } else {
                Ok(piece)
            }
        })
        .collect()
}

/// Render parameters as `name[?]: type`, in declaration order.
///
/// Only a trailing run of by-reference parameters becomes optional: the
/// scan goes right to left and the first by-value parameter closes the
/// window for everything before it.
pub fn render_params(params: &[Param], types: &TypeMap) -> Vec<String> {
    let mut can_be_optional = true;
    let mut args = Vec::with_capacity(params.len());

    for param in params.iter().rev() {
        let optional = param.is_ref && can_be_optional;
        args.push(format!(
            "{}{}: {}",
            param.name,
            if optional { "?" } else { "" },
            types.resolve(&param.ty)
        ));
        can_be_optional = can_be_optional && param.is_ref;
    }

    args.reverse();
    args
}

/// Render documentation as an indented `/** ... */` block.
///
/// Returns `None` when there is nothing to document.
pub fn render_comment(text: &str, mode: GenerationMode) -> Option<String> {
    let lines: Vec<&str> = if mode.template().strip_blank_comment_lines {
        text.lines().filter(|line| !line.trim().is_empty()).collect()
    } else if text.trim().is_empty() {
        Vec::new()
    } else {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    };

    if lines.is_empty() {
        return None;
    }

    let mut block = format!("{INDENT}/**\n");
    for line in lines {
        block.push_str(INDENT);
        block.push_str(" * ");
        block.push_str(&line.replace("*/", "*\\/"));
        block.push('\n');
    }
    block.push_str(INDENT);
    block.push_str(" */");
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, params: Vec<Param>, results: &str, comment: &str) -> NativeEntry {
        NativeEntry {
            name: name.to_string(),
            params,
            results: results.to_string(),
            comment: comment.to_string(),
        }
    }

    fn results(raw: &str, mode: GenerationMode) -> Result<String, &'static str> {
        render_results(raw, &TypeMap::default(), mode)
    }

    // -- results --

    #[test]
    fn test_void_result_dropped() {
        assert_eq!(results("[void]", GenerationMode::Current).unwrap(), "void");
        assert_eq!(results("void", GenerationMode::Current).unwrap(), "void");
        assert_eq!(
            results("[void, int]", GenerationMode::Current).unwrap(),
            "number"
        );
    }

    #[test]
    fn test_void_result_kept_in_legacy() {
        assert_eq!(results("[void]", GenerationMode::Legacy).unwrap(), "void");
        assert_eq!(
            results("[void, int]", GenerationMode::Legacy).unwrap(),
            "[void, number]"
        );
    }

    #[test]
    fn test_tuple_result() {
        assert_eq!(
            results("[Entity, int]", GenerationMode::Current).unwrap(),
            "[Entity | number, number]"
        );
        assert_eq!(
            results("[BOOL, Vector3, float]", GenerationMode::Current).unwrap(),
            "[BOOL, Vector3, number]"
        );
    }

    #[test]
    fn test_bare_result() {
        assert_eq!(results("Any", GenerationMode::Current).unwrap(), "any");
        assert_eq!(results("Blip", GenerationMode::Current).unwrap(), "Blip");
        assert_eq!(results("[Hash]", GenerationMode::Current).unwrap(), "number");
    }

    #[test]
    fn test_empty_brackets_mean_void() {
        assert_eq!(results("[]", GenerationMode::Current).unwrap(), "void");
        assert_eq!(results("[]", GenerationMode::Legacy).unwrap(), "void");
    }

    #[test]
    fn test_only_leading_void_dropped() {
        assert_eq!(
            results("[int, void]", GenerationMode::Current).unwrap(),
            "[number, void]"
        );
    }

    #[test]
    fn test_malformed_results() {
        for raw in [
            "",
            "[int",
            "int]",
            "[int, [float]]",
            "[int,float]",
            "[int, ]",
            "[ int]",
            "int, ",
        ] {
            assert!(
                results(raw, GenerationMode::Current).is_err(),
                "{raw:?} should be rejected"
            );
        }
    }

    // -- params --

    #[test]
    fn test_trailing_refs_optional() {
        let params = vec![
            Param::new("a", "int", false),
            Param::new("b", "int", true),
            Param::new("c", "float", true),
        ];
        assert_eq!(
            render_params(&params, &TypeMap::default()),
            vec!["a: number", "b?: number", "c?: number"]
        );
    }

    #[test]
    fn test_by_value_param_closes_optional_window() {
        let params = vec![
            Param::new("a", "int", true),
            Param::new("b", "int", false),
            Param::new("c", "int", true),
        ];
        assert_eq!(
            render_params(&params, &TypeMap::default()),
            vec!["a: number", "b: number", "c?: number"]
        );
    }

    #[test]
    fn test_last_param_by_value_means_no_optionals() {
        let params = vec![Param::new("a", "Entity", true), Param::new("b", "BOOL", false)];
        assert_eq!(
            render_params(&params, &TypeMap::default()),
            vec!["a: Entity | number", "b: BOOL"]
        );
    }

    #[test]
    fn test_no_params() {
        assert!(render_params(&[], &TypeMap::default()).is_empty());
    }

    // -- comments --

    #[test]
    fn test_comment_block() {
        assert_eq!(
            render_comment("Line one\nLine two", GenerationMode::Current).unwrap(),
            "  /**\n   * Line one\n   * Line two\n   */"
        );
    }

    #[test]
    fn test_blank_comment_is_omitted() {
        assert_eq!(render_comment("", GenerationMode::Current), None);
        assert_eq!(render_comment("  \n\n", GenerationMode::Current), None);
        assert_eq!(render_comment("  \n\n", GenerationMode::Legacy), None);
    }

    #[test]
    fn test_blank_lines_by_mode() {
        let text = "First\n\nSecond";
        assert_eq!(
            render_comment(text, GenerationMode::Current).unwrap(),
            "  /**\n   * First\n   * Second\n   */"
        );
        assert_eq!(
            render_comment(text, GenerationMode::Legacy).unwrap(),
            "  /**\n   * First\n   * \n   * Second\n   */"
        );
    }

    #[test]
    fn test_legacy_keeps_trailing_blank_line() {
        assert_eq!(
            render_comment("Line one\n", GenerationMode::Legacy).unwrap(),
            "  /**\n   * Line one\n   * \n   */"
        );
        assert_eq!(
            render_comment("Line one\r\n", GenerationMode::Legacy).unwrap(),
            "  /**\n   * Line one\n   * \n   */"
        );
        assert_eq!(
            render_comment("Line one\n", GenerationMode::Current).unwrap(),
            "  /**\n   * Line one\n   */"
        );
    }

    #[test]
    fn test_comment_close_sequence_escaped() {
        let block = render_comment("Returns */ something\nsee */ here", GenerationMode::Current)
            .unwrap();
        assert_eq!(block.matches("*/").count(), 1);
        assert!(block.ends_with("   */"));
        assert!(block.contains("Returns *\\/ something"));
        assert!(block.contains("see *\\/ here"));
    }

    // -- whole native --

    #[test]
    fn test_synthesize_documented_native() {
        let native = entry(
            "_GET_ENTITY_COORDS",
            vec![Param::new("entity", "Entity", false), Param::new("alive", "BOOL", true)],
            "Vector3",
            "Gets the current coordinates for a specified entity.",
        );
        let rendered = synthesize(&native, &TypeMap::default(), GenerationMode::Current).unwrap();
        assert_eq!(rendered.name, "getEntityCoords");
        assert_eq!(
            rendered.to_string(),
            "  /**\n   * Gets the current coordinates for a specified entity.\n   */\n  export function getEntityCoords(entity: Entity | number, alive?: BOOL): Vector3;"
        );
    }

    #[test]
    fn test_synthesize_undocumented_native() {
        let native = entry("PLAYER_PED_ID", vec![], "Ped", "");
        let rendered = synthesize(&native, &TypeMap::default(), GenerationMode::Current).unwrap();
        assert_eq!(rendered.comment, None);
        assert_eq!(
            rendered.to_string(),
            "  export function playerPedId(): Ped | Player | number;"
        );
    }

    #[test]
    fn test_synthesize_reports_native_on_format_error() {
        let native = entry("BROKEN_NATIVE", vec![], "[int", "");
        let err = synthesize(&native, &TypeMap::default(), GenerationMode::Current).unwrap_err();
        match err {
            CatalogError::Format { native, results, .. } => {
                assert_eq!(native, "BROKEN_NATIVE");
                assert_eq!(results, "[int");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
