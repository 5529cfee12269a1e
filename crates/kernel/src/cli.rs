//! CLI command implementations.
//!
//! Route commands only need the registry; account and API commands build
//! a client from the configuration.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;

use crate::client::{ApiClient, AuthSession, FileTokenStore};
use crate::config::Config;
use crate::route::{Route, RouteRegistry};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize output")?
    );
    Ok(())
}

fn print_route_table(routes: &[&Route]) {
    println!("{:<22} {:<30} {:<20} {:<5}", "ROUTE", "PATH", "NAME", "AUTH");
    println!("{}", "-".repeat(80));
    for route in routes {
        let auth = if route.requires_auth { "yes" } else { "no" };
        println!(
            "{:<22} {:<30} {:<20} {}",
            route.id, route.path, route.name, auth
        );
    }
}

fn print_tree(registry: &RouteRegistry, route: &Route, depth: usize) -> Result<()> {
    let marker = if route.show_in_navigation { "*" } else { " " };
    println!(
        "{marker} {}{:<width$} {}",
        "  ".repeat(depth),
        route.id,
        route.path,
        width = 24usize.saturating_sub(depth * 2)
    );
    for child in registry.children_of(&route.id)? {
        print_tree(registry, child, depth + 1)?;
    }
    Ok(())
}

/// List every route as an indented tree.
pub fn cmd_routes(registry: &RouteRegistry, output: Output) -> Result<()> {
    if output == Output::Json {
        return print_json(&registry.iter().collect::<Vec<_>>());
    }

    for root in registry.roots() {
        print_tree(registry, root, 0)?;
    }
    println!("\n{} routes (* = primary navigation)", registry.len());
    Ok(())
}

/// List primary navigation routes.
pub fn cmd_nav(registry: &RouteRegistry, output: Output) -> Result<()> {
    let routes = registry.navigation_routes();
    match output {
        Output::Json => print_json(&routes),
        Output::Text => {
            print_route_table(&routes);
            Ok(())
        }
    }
}

/// Print the breadcrumb trail for a route.
pub fn cmd_breadcrumbs(registry: &RouteRegistry, id: &str, output: Output) -> Result<()> {
    let trail = registry.generate_breadcrumbs(id)?;
    match output {
        Output::Json => print_json(&trail),
        Output::Text => {
            let rendered: Vec<String> = trail
                .iter()
                .map(|crumb| {
                    if crumb.current {
                        format!("[{}]", crumb.name)
                    } else {
                        format!("{} ({})", crumb.name, crumb.path)
                    }
                })
                .collect();
            println!("{}", rendered.join(" > "));
            Ok(())
        }
    }
}

/// Find the route declaring a path.
pub fn cmd_resolve(registry: &RouteRegistry, path: &str, output: Output) -> Result<()> {
    let route = registry.route_for_path(path)?;
    match output {
        Output::Json => print_json(route),
        Output::Text => {
            println!("{}", route.id);
            Ok(())
        }
    }
}

/// List a route's direct children.
pub fn cmd_children(registry: &RouteRegistry, id: &str, output: Output) -> Result<()> {
    let children = registry.children_of(id)?;
    match output {
        Output::Json => print_json(&children),
        Output::Text => {
            if children.is_empty() {
                println!("'{id}' has no child routes.");
            } else {
                print_route_table(&children);
            }
            Ok(())
        }
    }
}

/// List dashboard quick actions with their target paths.
pub fn cmd_quick_actions(registry: &RouteRegistry, output: Output) -> Result<()> {
    let actions = registry.quick_action_routes()?;
    match output {
        Output::Json => {
            let rows: Vec<Value> = actions
                .iter()
                .map(|(action, route)| {
                    serde_json::json!({
                        "id": action.id,
                        "name": action.name,
                        "icon": action.icon,
                        "route": action.route,
                        "path": route.path,
                    })
                })
                .collect();
            print_json(&rows)
        }
        Output::Text => {
            for (action, route) in actions {
                println!("{:<20} -> {} ({})", action.name, route.id, route.path);
            }
            Ok(())
        }
    }
}

/// Validate the configured registry and report its shape.
pub fn cmd_check(config: &Config) -> Result<()> {
    let registry = config.route_registry()?;
    let source = config
        .routes_file
        .as_ref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());

    println!(
        "{source}: {} routes, {} roots, {} in navigation",
        registry.len(),
        registry.roots().len(),
        registry.navigation_routes().len()
    );

    registry
        .quick_action_routes()
        .context("a dashboard quick action has no target route")?;
    Ok(())
}

fn session(config: &Config) -> Result<AuthSession> {
    let client = ApiClient::new(
        config.api_base_url.clone(),
        config.api_timeout,
        FileTokenStore::new(config.token_file.clone()),
    )
    .context("failed to create API client")?;
    Ok(AuthSession::new(client))
}

/// Environment variable read when `--password` is not given.
pub const PASSWORD_VAR: &str = "ORDERLEE_PASSWORD";

/// The password from the command line, else from [`PASSWORD_VAR`].
pub fn resolve_password(
    flag: Option<String>,
    var: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    match flag.or_else(|| var(PASSWORD_VAR)) {
        Some(password) if !password.is_empty() => Ok(password),
        _ => bail!("no password given; pass --password or set {PASSWORD_VAR}"),
    }
}

/// Sign in and store the token.
pub async fn cmd_login(config: &Config, email: &str, password: &str) -> Result<()> {
    let auth = session(config)?
        .login(email, password)
        .await
        .context("login failed")?;

    let who = auth.full_name.or(auth.email).unwrap_or_else(|| email.to_string());
    println!("Signed in as {who}.");
    Ok(())
}

/// Forget the stored token.
pub fn cmd_logout(config: &Config) -> Result<()> {
    session(config)?.logout()?;
    println!("Signed out.");
    Ok(())
}

/// Show the signed-in user.
pub async fn cmd_whoami(config: &Config) -> Result<()> {
    match session(config)?.restore().await? {
        Some(user) => print_json(&user),
        None => bail!("not signed in"),
    }
}

/// GET an API endpoint and print its JSON.
pub async fn cmd_get(config: &Config, endpoint: &str) -> Result<()> {
    if !endpoint.starts_with('/') {
        bail!("endpoint must start with '/', e.g. /orders");
    }

    let session = session(config)?;
    let value: Value = session
        .client()
        .get(endpoint)
        .await
        .with_context(|| format!("GET {endpoint} failed"))?;
    print_json(&value)
}
