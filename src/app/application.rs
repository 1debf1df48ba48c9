//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;
use std::time::Duration;

use gpui::{
    px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::eventing::app_event::AppEvent;
use crate::helpers::{new_key_bindings, MenuAction};
use crate::services::{ArticClient, PageSource, TableService};
use crate::utils::config_store::load_app_config;

/// Run the artworks table application
pub fn run_app() {
    let (config, config_path) = load_app_config();

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let client = match ArticClient::new(&config.api) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("Cannot create HTTP client: {}", e);
                cx.quit();
                return;
            }
        };

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        let source: Arc<dyn PageSource> = Arc::new(client);
        let service = TableService::new(
            source,
            event_tx.clone(),
            config.api.page_size,
            Duration::from_secs(config.api.timeout_secs),
        );
        cx.set_global(service);

        let entities = AppEntities::init(config.clone(), config_path, cx);
        cx.set_global(entities.clone());

        let _ = event_tx.send(AppEvent::info(format!(
            "Using {} ({} records per page)",
            config.api.base_url, config.api.page_size
        )));

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Artworks")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx.clone(), cx))
        }) {
            tracing::error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
