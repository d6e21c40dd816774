//! Output flavours of the declaration module.
//!
//! The current flavour targets the `@altv/natives` package; the legacy one
//! reproduces the older `natives` module that sits next to `alt-client`.

/// Fixed text and policies for one flavour of generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleTemplate {
    pub module_name: &'static str,
    /// Full `/// <reference ... />` directive line.
    pub reference: &'static str,
    /// Full import line placed at the top of the module block.
    pub import: &'static str,
    /// Keep an explicit leading `void` in multi-value results.
    pub keep_void_result: bool,
    /// Drop whitespace-only lines from documentation before rendering.
    pub strip_blank_comment_lines: bool,
}

const CURRENT: ModuleTemplate = ModuleTemplate {
    module_name: "@altv/natives",
    reference: r#"/// <reference types="../client/index.d.ts" />"#,
    import: r#"import { Entity, Player, Vector3, Vehicle } from "@altv/client";"#,
    keep_void_result: false,
    strip_blank_comment_lines: true,
};

const LEGACY: ModuleTemplate = ModuleTemplate {
    module_name: "natives",
    reference: r#"/// <reference types="@altv/types-client" />"#,
    import: r#"import { Vector3, Entity, Player, Vehicle } from "alt-client";"#,
    keep_void_result: true,
    strip_blank_comment_lines: false,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    #[default]
    Current,
    Legacy,
}

impl GenerationMode {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::Current }
    }

    pub fn template(self) -> &'static ModuleTemplate {
        match self {
            Self::Current => &CURRENT,
            Self::Legacy => &LEGACY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
