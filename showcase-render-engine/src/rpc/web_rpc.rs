use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::configurator::selection::{
    PaintFinish, PaintSelection, PaintSelectionEvent, SelectionChange, SelectionSource,
};
use crate::engine::loading::progress::{LoadingProgress, report_phase};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Resource managing bidirectional RPC communication between React and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the React frontend without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the React frontend.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    /// Notifications queued but not yet flushed to the frontend.
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    notify_loading_progress,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Cheap pre-filter before queuing; full parsing happens on the
            // Bevy side.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the React frontend.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    selection: Res<PaintSelection>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut selection_events: EventWriter<PaintSelectionEvent>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, &selection, &mut selection_events)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Ignoring malformed RPC message: {parse_error}");
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    selection: &PaintSelection,
    selection_events: &mut EventWriter<PaintSelectionEvent>,
) -> Option<RpcResponse> {
    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "set_paint_colour" => handle_set_paint_colour(&request.params, selection_events),
        "set_paint_finish" => handle_set_paint_finish(&request.params, selection_events),
        "get_paint_selection" => Ok(serde_json::json!({
            "colour": selection.colour,
            "finish": selection.finish.as_str(),
        })),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Select an exterior colour. Any 24-bit value is accepted; the curated
/// palette is a frontend concern.
fn handle_set_paint_colour(
    params: &serde_json::Value,
    selection_events: &mut EventWriter<PaintSelectionEvent>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ColourParams {
        colour: u32,
    }

    let colour_params = serde_json::from_value::<ColourParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'colour' parameter"))?;

    selection_events.write(PaintSelectionEvent {
        change: SelectionChange::Colour(colour_params.colour),
        source: SelectionSource::Rpc,
    });

    Ok(serde_json::json!({ "success": true, "colour": colour_params.colour }))
}

fn handle_set_paint_finish(
    params: &serde_json::Value,
    selection_events: &mut EventWriter<PaintSelectionEvent>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct FinishParams {
        finish: String,
    }

    let finish_params = serde_json::from_value::<FinishParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'finish' parameter"))?;

    let finish = PaintFinish::from_string(&finish_params.finish).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown finish: {}", finish_params.finish))
    })?;

    selection_events.write(PaintSelectionEvent {
        change: SelectionChange::Finish(finish),
        source: SelectionSource::Rpc,
    });

    Ok(serde_json::json!({ "success": true, "finish": finish.as_str() }))
}

/// Push progress updates to the frontend whenever the percentage moves.
fn notify_loading_progress(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_changed() {
        return;
    }
    let report = report_phase(loading_progress.percent());
    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({ "percent": report.percent, "label": report.label }),
    );
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the React frontend.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Notifications first, responses second, to keep ordering stable.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    let responses: Vec<RpcResponse> = rpc_interface.outgoing_responses.drain(..).collect();
    for response in responses {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window (React frontend).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {e}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op off the web; native surfaces read the resources directly.
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpc_app() -> App {
        let mut app = App::new();
        app.init_resource::<PaintSelection>()
            .init_resource::<LoadingProgress>()
            .add_event::<PaintSelectionEvent>()
            .add_plugins(WebRpcPlugin);
        app
    }

    fn request(method: &str, params: serde_json::Value) -> String {
        serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1,
        })
        .to_string()
    }

    #[test]
    fn set_paint_colour_raises_a_selection_event() {
        let mut app = rpc_app();
        app.world_mut().send_event(IncomingRpcMessage {
            content: request("set_paint_colour", serde_json::json!({ "colour": 0xdc2626 })),
        });
        app.update();

        let events = app.world().resource::<Events<PaintSelectionEvent>>();
        let mut cursor = events.get_cursor();
        let raised: Vec<_> = cursor.read(events).collect();
        assert_eq!(raised.len(), 1);
        assert!(matches!(
            raised[0].change,
            SelectionChange::Colour(0x00dc2626)
        ));
    }

    #[test]
    fn unknown_finish_is_rejected_without_an_event() {
        let mut app = rpc_app();
        app.world_mut().send_event(IncomingRpcMessage {
            content: request("set_paint_finish", serde_json::json!({ "finish": "chrome" })),
        });
        app.update();

        let events = app.world().resource::<Events<PaintSelectionEvent>>();
        let mut cursor = events.get_cursor();
        assert_eq!(cursor.read(events).count(), 0);
    }

    #[test]
    fn malformed_messages_are_ignored() {
        let mut app = rpc_app();
        app.world_mut().send_event(IncomingRpcMessage {
            content: "jsonrpc but not actually json".to_string(),
        });
        // Must not panic or produce selection events.
        app.update();
        let events = app.world().resource::<Events<PaintSelectionEvent>>();
        let mut cursor = events.get_cursor();
        assert_eq!(cursor.read(events).count(), 0);
    }
}
