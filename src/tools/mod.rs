pub mod catalog;
pub mod mcp_router;
pub mod registry;
pub mod wrike_tool;
