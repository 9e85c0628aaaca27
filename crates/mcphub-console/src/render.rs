//! Markup rendering for list regions and the auth selector.
//!
//! Every string that came from the backend goes through [`escape_html`]
//! before it is interpolated, including attribute values. Controls carry the
//! resource name in a `data-*` attribute instead of inline script.

use mcphub_core::{
    AuthConfigRef, CommandConfig, CommandSource, ListRegion, ParameterSpec, ServerConfig,
    escape_html,
};

/// Text shown for absent optional values.
const NONE_TEXT: &str = "None";

/// Placeholder rendered while a reload is in flight.
pub fn loading_markup() -> String {
    r#"<div class="loading">Loading...</div>"#.to_string()
}

/// Message shown when a collection is empty.
pub const fn empty_message(region: ListRegion) -> &'static str {
    match region {
        ListRegion::Servers => "No MCP servers configured",
        ListRegion::Commands => "No commands configured",
    }
}

/// Placeholder rendered when a collection is empty.
pub fn empty_markup(region: ListRegion) -> String {
    format!(r#"<div class="loading">{}</div>"#, empty_message(region))
}

/// Inline error rendered when a reload fails.
pub fn error_markup(detail: &str) -> String {
    format!(
        r#"<div class="error-message">Failed to load: {}</div>"#,
        escape_html(detail)
    )
}

fn or_none(text: &str) -> &str {
    if text.is_empty() { NONE_TEXT } else { text }
}

// ============================================================================
// Servers
// ============================================================================

/// Render the servers list. Empty input renders the empty placeholder.
pub fn render_servers(servers: &[ServerConfig]) -> String {
    if servers.is_empty() {
        return empty_markup(ListRegion::Servers);
    }
    servers.iter().map(render_server_card).collect()
}

fn render_server_card(server: &ServerConfig) -> String {
    let name = escape_html(&server.name);
    let status = &server.connection_status;
    let checked = if server.enabled { " checked" } else { "" };
    let error = server
        .connection_error
        .as_deref()
        .filter(|e| !e.is_empty())
        .map(|e| format!(r#"<div class="error-message">Error: {}</div>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="server-card">"#,
            r#"<div class="server-header">"#,
            r#"<div><span class="server-name">{name}</span>"#,
            r#"<span class="server-status status-{class}">{label}</span></div>"#,
            r#"<div class="server-actions">"#,
            r#"<label class="toggle-switch"><input type="checkbox" data-server="{name}"{checked}><span class="slider"></span></label>"#,
            r#"<button class="delete-btn" data-server="{name}">Delete</button>"#,
            r#"</div></div>"#,
            r#"<div class="server-info">"#,
            r#"<div class="server-info-item"><strong>Description:</strong> {description}</div>"#,
            r#"<div class="server-info-item"><strong>Prefix:</strong> {prefix}</div>"#,
            r#"<div class="server-info-item"><strong>Connection:</strong> {kind}</div>"#,
            "{error}",
            r#"</div></div>"#,
        ),
        name = name,
        class = escape_html(status.css_class()),
        label = escape_html(status.label()),
        checked = checked,
        description = escape_html(or_none(&server.description)),
        prefix = escape_html(or_none(server.prefix.as_deref().unwrap_or_default())),
        kind = server.connection.kind(),
        error = error,
    )
}

// ============================================================================
// Commands
// ============================================================================

/// Render the commands list. Empty input renders the empty placeholder.
///
/// Only locally defined commands get a delete control.
pub fn render_commands(commands: &[CommandConfig]) -> String {
    if commands.is_empty() {
        return empty_markup(ListRegion::Commands);
    }
    commands.iter().map(render_command_card).collect()
}

fn render_command_card(command: &CommandConfig) -> String {
    let name = escape_html(&command.name);
    let source_class = if command.source == CommandSource::Mcp {
        "source-mcp"
    } else {
        "source-local"
    };
    let delete = if command.source.is_deletable() {
        format!(r#"<div><button class="delete-btn" data-command="{name}">Delete</button></div>"#)
    } else {
        String::new()
    };
    let service = command
        .service
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| {
            format!(
                r#"<div class="command-info-item"><strong>Service:</strong> {}</div>"#,
                escape_html(s)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="command-card">"#,
            r#"<div class="command-header">"#,
            r#"<div><span class="command-name">{name}</span>"#,
            r#"<span class="command-source {source_class}">{source_label}</span></div>"#,
            "{delete}",
            r#"</div>"#,
            r#"<div class="command-info">"#,
            r#"<div class="command-info-item"><strong>Description:</strong> {description}</div>"#,
            r#"<div class="command-info-item"><strong>Type:</strong> {kind}</div>"#,
            "{service}{parameters}",
            r#"</div></div>"#,
        ),
        name = name,
        source_class = source_class,
        source_label = command.source.label(),
        delete = delete,
        description = escape_html(or_none(&command.description)),
        kind = command.kind.kind(),
        service = service,
        parameters = render_parameters(&command.parameters),
    )
}

fn render_parameters(parameters: &[ParameterSpec]) -> String {
    if parameters.is_empty() {
        return r#"<div class="command-info-item"><em>No parameters</em></div>"#.to_string();
    }

    let items: String = parameters
        .iter()
        .map(|p| {
            let required = if p.required {
                r#"<span class="parameter-required">Required</span>"#
            } else {
                ""
            };
            let description = p
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(|d| {
                    format!(
                        r#"<div class="parameter-description">{}</div>"#,
                        escape_html(d)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="parameter-item"><span class="parameter-name">{}</span><span class="parameter-type">{}</span>{required}{description}</div>"#,
                escape_html(&p.name),
                escape_html(&p.kind),
            )
        })
        .collect();

    format!(r#"<div class="parameters-list"><strong>Parameters:</strong>{items}</div>"#)
}

// ============================================================================
// Auth selector
// ============================================================================

/// Options for the auth-config selection control: a leading "None" entry
/// followed by one `name (type)` entry per config.
pub fn render_auth_options(auth_configs: &[AuthConfigRef]) -> String {
    let mut markup = format!(r#"<option value="">{NONE_TEXT}</option>"#);
    for auth in auth_configs {
        markup.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            escape_html(&auth.name),
            escape_html(&auth.display_label())
        ));
    }
    markup
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcphub_core::{CommandKind, ConnectionConfig, ConnectionStatus, HttpCommand};

    fn server(name: &str) -> ServerConfig {
        ServerConfig {
            name: name.to_string(),
            description: String::new(),
            enabled: true,
            connection: ConnectionConfig::stdio("uvx", vec![]),
            prefix: None,
            timeout: 30,
            retry_on_failure: true,
            auto_reconnect: true,
            connection_status: ConnectionStatus::Connected,
            connection_error: None,
        }
    }

    fn command(name: &str, source: CommandSource) -> CommandConfig {
        CommandConfig {
            name: name.to_string(),
            description: "desc".to_string(),
            kind: CommandKind::Http {
                http: HttpCommand::default(),
            },
            enabled: true,
            source,
            service: None,
            parameters: vec![],
        }
    }

    #[test]
    fn test_empty_lists_render_placeholders() {
        assert!(render_servers(&[]).contains("No MCP servers configured"));
        assert!(render_commands(&[]).contains("No commands configured"));
    }

    #[test]
    fn test_server_card_escapes_remote_text() {
        let mut hostile = server("<img src=x onerror=alert(1)>");
        hostile.description = "\"quoted\" & 'single'".to_string();
        hostile.connection_status = ConnectionStatus::Other("<b>".to_string());
        hostile.connection_error = Some("<script>".to_string());

        let markup = render_servers(&[hostile]);
        assert!(!markup.contains("<img"));
        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(markup.contains("&quot;quoted&quot; &amp; &#39;single&#39;"));
        assert!(markup.contains("Error: &lt;script&gt;"));
    }

    #[test]
    fn test_command_card_escapes_remote_text() {
        let mut hostile = command("x\" onclick=\"alert(1)", CommandSource::Local);
        hostile.description = "<i>desc</i>".to_string();
        hostile.service = Some("<svc>".to_string());
        hostile.parameters = vec![ParameterSpec {
            name: "<p>".to_string(),
            kind: "<t>".to_string(),
            required: false,
            description: Some("a & b".to_string()),
        }];

        let markup = render_commands(&[hostile]);
        assert!(!markup.contains("onclick=\"alert"));
        assert!(markup.contains(r#"data-command="x&quot; onclick=&quot;alert(1)""#));
        assert!(markup.contains("&lt;i&gt;desc&lt;/i&gt;"));
        assert!(markup.contains("Service:</strong> &lt;svc&gt;"));
        assert!(markup.contains("&lt;p&gt;"));
        assert!(markup.contains("&lt;t&gt;"));
        assert!(markup.contains("a &amp; b"));
        for raw in ["<i>", "<svc>", "<p>", "<t>"] {
            assert!(!markup.contains(raw));
        }
    }

    #[test]
    fn test_server_card_state() {
        let mut disabled = server("alpha");
        disabled.enabled = false;
        disabled.prefix = Some("a_".to_string());

        let markup = render_servers(&[disabled]);
        assert!(!markup.contains(" checked"));
        assert!(markup.contains("status-connected"));
        assert!(markup.contains("<strong>Prefix:</strong> a_"));
        assert!(markup.contains("<strong>Description:</strong> None"));
        assert!(markup.contains("<strong>Connection:</strong> stdio"));

        assert!(render_servers(&[server("beta")]).contains(" checked"));
    }

    #[test]
    fn test_delete_affordance_follows_source() {
        let local = render_commands(&[command("local-cmd", CommandSource::Local)]);
        assert!(local.contains(r#"data-command="local-cmd""#));
        assert!(local.contains("source-local"));

        let mcp = render_commands(&[command("remote-cmd", CommandSource::Mcp)]);
        assert!(!mcp.contains("delete-btn"));
        assert!(mcp.contains("source-mcp"));
        assert!(mcp.contains("MCP tool"));

        let unknown = render_commands(&[command("legacy", CommandSource::Unknown)]);
        assert!(!unknown.contains("delete-btn"));
        assert!(unknown.contains("Local command"));
    }

    #[test]
    fn test_command_parameters() {
        let mut cmd = command("search", CommandSource::Mcp);
        cmd.service = Some("tapd".to_string());
        cmd.parameters = vec![
            ParameterSpec {
                name: "query".to_string(),
                kind: "string".to_string(),
                required: true,
                description: Some("Search <terms>".to_string()),
            },
            ParameterSpec {
                name: "limit".to_string(),
                kind: "number".to_string(),
                required: false,
                description: None,
            },
        ];

        let markup = render_commands(&[cmd]);
        assert!(markup.contains("<strong>Service:</strong> tapd"));
        assert_eq!(markup.matches("parameter-item").count(), 2);
        assert_eq!(markup.matches("parameter-required").count(), 1);
        assert!(markup.contains("Search &lt;terms&gt;"));

        let bare = render_commands(&[command("bare", CommandSource::Local)]);
        assert!(bare.contains("No parameters"));
    }

    #[test]
    fn test_error_markup_escapes_detail() {
        assert_eq!(
            error_markup("<refused>"),
            r#"<div class="error-message">Failed to load: &lt;refused&gt;</div>"#
        );
    }

    #[test]
    fn test_auth_options() {
        assert_eq!(render_auth_options(&[]), r#"<option value="">None</option>"#);

        let options = render_auth_options(&[AuthConfigRef {
            name: "gh\"x".to_string(),
            kind: "bearer_token".to_string(),
        }]);
        assert!(options.contains(r#"<option value="gh&quot;x">gh&quot;x (bearer_token)</option>"#));
    }
}
