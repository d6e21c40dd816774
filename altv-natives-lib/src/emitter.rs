//! Writing the `declare module` file.

use std::fs;
use std::path::Path;

use altv_natives_core::{GenerationMode, RenderedNative};

use crate::error::GenerateError;

/// Local time in the `M/D/YYYY, h:mm:ss AM` shape used in the banner.
pub fn generation_timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// Build the full declaration file text.
pub fn render_module(natives: &[RenderedNative], mode: GenerationMode, generated_at: &str) -> String {
    let template = mode.template();
    let body = natives
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "// This file was generated on {generated_at} - DO NOT MODIFY MANUALLY\n\
         \n\
         {reference}\n\
         \n\
         /**\n \
         * @module {module}\n \
         */\n\
         declare module \"{module}\" {{\n  \
         {import}\n\
         \n\
         {body}\n\
         }}\n",
        reference = template.reference,
        module = template.module_name,
        import = template.import,
    )
}

/// Render and write the declaration file, stamped with the current time.
///
/// The text is written next to `output` first and renamed over it, so an
/// interrupted write leaves the previous file in place.
pub fn emit(
    natives: &[RenderedNative],
    mode: GenerationMode,
    output: &Path,
) -> Result<(), GenerateError> {
    let contents = render_module(natives, mode, &generation_timestamp());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(GenerateError::at(parent))?;
    }

    let mut tmp_name = output.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);
    fs::write(tmp, contents).map_err(GenerateError::at(tmp))?;
    if let Err(source) = fs::rename(tmp, output) {
        let _ = fs::remove_file(tmp);
        return Err(GenerateError::io(output, source));
    }

    Ok(())
}
