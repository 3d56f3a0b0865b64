use serde::{Deserialize, Serialize};

/// The translation hook a migrated file imports and calls.
///
/// The hook is an external collaborator: calling `name()` returns an object that
/// exposes `accessor(key)`. Only its syntactic presence is guaranteed here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpec {
    /// Hook identifier, e.g. `useLanguage`.
    #[serde(default = "default_name")]
    pub name: String,
    /// Module the hook is imported from, e.g. `@/hooks/useLanguage`.
    #[serde(default = "default_import_path")]
    pub import_path: String,
    /// Destructured lookup function, e.g. `t`.
    #[serde(default = "default_accessor")]
    pub accessor: String,
}

fn default_name() -> String {
    "useLanguage".to_string()
}

fn default_import_path() -> String {
    "@/hooks/useLanguage".to_string()
}

fn default_accessor() -> String {
    "t".to_string()
}

impl Default for HookSpec {
    fn default() -> Self {
        Self {
            name: default_name(),
            import_path: default_import_path(),
            accessor: default_accessor(),
        }
    }
}

impl HookSpec {
    /// The migration marker in both quoting styles: `from "<path>"` and `from '<path>'`.
    pub fn import_markers(&self) -> [String; 2] {
        [
            format!("from \"{}\"", self.import_path),
            format!("from '{}'", self.import_path),
        ]
    }

    /// `import { useLanguage } from "@/hooks/useLanguage";`
    pub fn import_statement(&self) -> String {
        format!("import {{ {} }} from \"{}\";", self.name, self.import_path)
    }

    /// `const { t } = useLanguage();`
    pub fn binding_statement(&self) -> String {
        format!("const {{ {} }} = {}();", self.accessor, self.name)
    }

    /// Interpolated lookup call, e.g. `{t("common.save")}`.
    pub fn lookup_call(&self, key: &str) -> String {
        // serde_json renders a valid JS string literal for any key
        let literal = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));
        format!("{{{}({})}}", self.accessor, literal)
    }
}
