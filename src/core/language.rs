//! Best-effort language classification from a file extension.

use std::collections::BTreeMap;
use std::path::Path;

pub const PLAIN_TEXT: &str = "plaintext";

const BUILTIN: &[(&str, &str)] = &[
    ("bat", "bat"),
    ("c", "c"),
    ("cc", "cpp"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("go", "go"),
    ("h", "c"),
    ("hpp", "cpp"),
    ("html", "html"),
    ("java", "java"),
    ("js", "javascript"),
    ("json", "json"),
    ("jsx", "javascriptreact"),
    ("kt", "kotlin"),
    ("lua", "lua"),
    ("md", "markdown"),
    ("php", "php"),
    ("ps1", "powershell"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("scss", "scss"),
    ("sh", "shellscript"),
    ("sql", "sql"),
    ("swift", "swift"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("tsx", "typescriptreact"),
    ("txt", PLAIN_TEXT),
    ("xml", "xml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
];

/// Language id for `path`. User associations (keyed `*.ext`) win over the
/// built-in table; unknown or missing extensions map to [`PLAIN_TEXT`].
pub fn language_for_path(path: &Path, associations: &BTreeMap<String, String>) -> String {
    let Some(ext) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
    else {
        return PLAIN_TEXT.to_string();
    };

    if let Some(language) = associations.get(&format!("*.{ext}")) {
        return language.clone();
    }

    BUILTIN
        .binary_search_by(|(known, _)| known.cmp(&ext.as_str()))
        .map(|idx| BUILTIN[idx].1)
        .unwrap_or(PLAIN_TEXT)
        .to_string()
}
