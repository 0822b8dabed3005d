use crate::catalog::AgentCatalog;
use crate::error::Result;

pub fn execute(catalog: &AgentCatalog, mcp_only: bool) -> Result<()> {
    let agents: Vec<_> = catalog
        .list()
        .into_iter()
        .filter(|a| !mcp_only || a.agent.supports_mcp)
        .collect();

    println!("Supported agents:");
    for agent in agents {
        let mcp = if agent.agent.supports_mcp {
            let transports: Vec<_> = agent.transports().iter().map(|t| t.as_str()).collect();
            format!("mcp: {}", transports.join(", "))
        } else {
            "no mcp".to_string()
        };
        println!("  {:<12} {} ({})", agent.agent.slug, agent.agent.name, mcp);
    }

    Ok(())
}
