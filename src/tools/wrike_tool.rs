use async_trait::async_trait;

use crate::clients::wrike::WrikeRemote;
use crate::core::error::ToolError;
use crate::core::tool::{Tool, ToolSpec};
use crate::domain::{prepare, Operation};

/// One catalog operation bound to the shared Wrike client.
#[derive(Clone)]
pub struct WrikeTool {
    op: &'static Operation,
    remote: WrikeRemote,
}

impl WrikeTool {
    pub fn new(op: &'static Operation, remote: WrikeRemote) -> Self {
        Self { op, remote }
    }

    pub fn operation(&self) -> &'static Operation {
        self.op
    }
}

impl ToolSpec for WrikeTool {
    fn name(&self) -> &'static str {
        self.op.name
    }
    fn description(&self) -> &'static str {
        self.op.description
    }
    fn input_schema(&self) -> serde_json::Value {
        self.op.input_schema()
    }
}

#[async_trait]
impl Tool for WrikeTool {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let req = prepare(self.op, arguments)?;
        self.remote.execute(self.op.name, &req).await
    }
}
