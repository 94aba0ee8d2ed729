//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each route is a thin adapter around `ToolRegistry::invoke`, so the
//! protocol transports and direct registry calls share the same dispatch
//! and validation logic.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();

    for tool in registry.tools() {
        let name = tool.name.to_string();
        let registry = registry.clone();
        router = router.with_route(ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
            let arguments = ctx.arguments.clone().unwrap_or_default();
            let registry = registry.clone();
            let name = name.clone();
            async move { Ok(registry.invoke(&name, arguments)) }.boxed()
        }));
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn test_registry() -> Arc<ToolRegistry> {
        Arc::new(ToolRegistry::with_builtin_tools().unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"subtract"));
        assert!(names.contains(&"multiply"));
        assert!(names.contains(&"divide"));
        assert!(names.contains(&"power"));
        assert!(names.contains(&"calculate"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry = test_registry();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(registry.clone());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
