use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::wrike::WrikeRemote;
use crate::core::error::ToolError;
use crate::core::tool::Tool;
use crate::infra::config::AppConfig;
use crate::tools::catalog::OPERATIONS;
use crate::tools::wrike_tool::WrikeTool;

#[derive(Clone, Default)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Tool + 'static,
    {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in iter.into_iter() {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Tool metadata, sorted by name.
    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub async fn call(&self, name: &str, args: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tracing::debug!(tool = name, "tool call");
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Register every catalog operation against one shared client.
pub fn build_registry(remote: WrikeRemote) -> ToolRegistry {
    ToolRegistry::with_tools(
        OPERATIONS
            .iter()
            .map(|op| Arc::new(WrikeTool::new(op, remote.clone()))),
    )
}

/// Build the registry from file + environment configuration.
pub fn build_registry_from_env() -> ToolRegistry {
    let cfg = AppConfig::from_env_and_toml();
    if cfg.wrike.token().is_none() {
        tracing::warn!("WRIKE_ACCESS_TOKEN not configured; Wrike tools will fail until it is set");
    }
    build_registry(WrikeRemote::from_config(&cfg.wrike))
}
