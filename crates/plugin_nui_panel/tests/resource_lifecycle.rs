//! End-to-end resource lifecycle tests against an in-memory host.

use async_trait::async_trait;
use debug_log::{DebugConfig, LogStream, MemorySink};
use plugin_nui_panel::{open_nui_event_name, NuiPanelResource, OpenNuiEvent, ResourceConfig};
use resource_api::{
    CommandError, CommandRegistry, CommandSource, PlayerId, Resource, ServerContext, ServerError,
};
use std::sync::{Arc, Mutex};

/// In-memory host context recording every client emission.
struct RecordingContext {
    name: String,
    emissions: Mutex<Vec<(PlayerId, String, Vec<u8>)>>,
    reject_emissions: bool,
}

impl RecordingContext {
    fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            emissions: Mutex::new(Vec::new()),
            reject_emissions: false,
        })
    }

    fn rejecting(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            emissions: Mutex::new(Vec::new()),
            reject_emissions: true,
        })
    }

    fn emissions(&self) -> Vec<(PlayerId, String, Vec<u8>)> {
        self.emissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServerContext for RecordingContext {
    fn resource_name(&self) -> &str {
        &self.name
    }

    async fn emit_client(
        &self,
        player_id: PlayerId,
        event: &str,
        data: &[u8],
    ) -> Result<(), ServerError> {
        if self.reject_emissions {
            return Err(ServerError::PlayerNotConnected(player_id));
        }
        self.emissions
            .lock()
            .unwrap()
            .push((player_id, event.to_string(), data.to_vec()));
        Ok(())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .try_init();
}

fn enabled_config() -> ResourceConfig {
    ResourceConfig {
        debug: DebugConfig::all_enabled(),
        ..ResourceConfig::default()
    }
}

#[tokio::test]
async fn test_startup_greeting_is_logged() {
    init_tracing();
    let sink = Arc::new(MemorySink::new());
    let mut resource = NuiPanelResource::with_sink(enabled_config(), sink.clone());
    let context = RecordingContext::new("panel_host");

    resource.on_start(context.clone()).await.unwrap();

    let lines = sink.lines_for(LogStream::Standard);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[panel_host]"));
    assert!(lines[0].contains("[SERVER]"));
    assert!(lines[0].contains("[INFO]"));
    assert!(lines[0].contains("Resource started"));
}

#[tokio::test]
async fn test_command_dispatch_emits_to_invoking_player() {
    init_tracing();
    let sink = Arc::new(MemorySink::new());
    let mut resource = NuiPanelResource::with_sink(enabled_config(), sink.clone());
    let context = RecordingContext::new("panel_host");
    let registry = Arc::new(CommandRegistry::new());

    resource
        .register_commands(registry.clone(), context.clone())
        .await
        .unwrap();
    resource.on_start(context.clone()).await.unwrap();
    assert!(registry.is_registered("openNui"));

    let player = PlayerId::new();
    registry
        .dispatch("openNui", CommandSource::Player(player))
        .await
        .unwrap();

    let emissions = context.emissions();
    assert_eq!(emissions.len(), 1);

    let (target, event_name, payload) = &emissions[0];
    assert_eq!(*target, player);
    assert_eq!(event_name, &open_nui_event_name("panel_host"));

    let event: OpenNuiEvent = serde_json::from_slice(payload).unwrap();
    assert_eq!(event.player_id, player);
    assert_eq!(event.resource, "panel_host");
    assert!(event.timestamp > 0);

    // The UI category logs the outgoing signal.
    let ui_lines: Vec<_> = sink
        .lines_for(LogStream::Standard)
        .into_iter()
        .filter(|line| line.contains("[UI]"))
        .collect();
    assert_eq!(ui_lines.len(), 1);
    assert!(ui_lines[0].contains(&player.to_string()));
}

#[tokio::test]
async fn test_console_invocation_emits_nothing() {
    init_tracing();
    let mut resource = NuiPanelResource::new(enabled_config());
    let context = RecordingContext::new("panel_host");
    let registry = Arc::new(CommandRegistry::new());

    resource
        .register_commands(registry.clone(), context.clone())
        .await
        .unwrap();

    registry
        .dispatch("openNui", CommandSource::Console)
        .await
        .unwrap();

    assert!(context.emissions().is_empty());
}

#[tokio::test]
async fn test_disabled_command_is_not_registered() {
    init_tracing();
    let config = ResourceConfig {
        enable_nui_command: false,
        ..enabled_config()
    };
    let mut resource = NuiPanelResource::new(config);
    let context = RecordingContext::new("panel_host");
    let registry = Arc::new(CommandRegistry::new());

    resource
        .register_commands(registry.clone(), context.clone())
        .await
        .unwrap();

    assert!(registry.is_empty());
    let result = registry
        .dispatch("openNui", CommandSource::Player(PlayerId::new()))
        .await;
    assert!(matches!(result, Err(CommandError::NotFound(_))));
}

#[tokio::test]
async fn test_custom_command_name_is_honored() {
    init_tracing();
    let config = ResourceConfig {
        nui_command_name: "panel".to_string(),
        ..enabled_config()
    };
    let mut resource = NuiPanelResource::new(config);
    let context = RecordingContext::new("panel_host");
    let registry = Arc::new(CommandRegistry::new());

    resource
        .register_commands(registry.clone(), context.clone())
        .await
        .unwrap();

    assert!(registry.is_registered("panel"));
    assert!(!registry.is_registered("openNui"));
}

#[tokio::test]
async fn test_emission_failure_surfaces_as_handler_error() {
    init_tracing();
    let mut resource = NuiPanelResource::new(enabled_config());
    let context = RecordingContext::rejecting("panel_host");
    let registry = Arc::new(CommandRegistry::new());

    resource
        .register_commands(registry.clone(), context.clone())
        .await
        .unwrap();

    let result = registry
        .dispatch("openNui", CommandSource::Player(PlayerId::new()))
        .await;
    assert!(matches!(result, Err(CommandError::HandlerFailed(_))));
    assert!(context.emissions().is_empty());
}

#[tokio::test]
async fn test_debug_config_changes_take_effect_live() {
    init_tracing();
    let sink = Arc::new(MemorySink::new());
    let config = ResourceConfig::default(); // debug disabled
    let mut resource = NuiPanelResource::with_sink(config, sink.clone());
    let context = RecordingContext::new("panel_host");

    resource.on_start(context.clone()).await.unwrap();
    assert!(sink.is_empty());

    resource
        .debug_config()
        .replace(DebugConfig::all_enabled());
    resource.on_stop(context.clone()).await.unwrap();

    let lines = sink.lines_for(LogStream::Standard);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Resource stopping"));
}

#[tokio::test]
async fn test_resource_metadata() {
    let resource = NuiPanelResource::new(ResourceConfig::default());
    assert_eq!(resource.name(), "nui_panel");
    assert!(!resource.version().is_empty());
}
