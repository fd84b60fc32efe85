use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokebot_common::chat::{commands, CommandDefinition, Interaction};

pub async fn handle_interaction(
    State(state): State<AppState>,
    Json(interaction): Json<Interaction>,
) -> Response {
    log::info!("Command /{} invoked", interaction.name());

    match state.router.dispatch(&interaction).await {
        Some(reply) => (StatusCode::OK, Json(reply)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn list_commands() -> Json<Vec<CommandDefinition>> {
    Json(commands())
}

#[cfg(test)]
mod tests {
    use crate::{
        app,
        router::{BAD_USAGE_MESSAGE, FAILURE_MESSAGE},
        testing::{spawn_control_server, ControlServer},
        AppState, Args,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use clap::Parser;
    use pokebot_common::screen::PixelFormat;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app_for(url: &str) -> Router {
        let args = Args::parse_from(["pokebot-proxy", "--emulator-url", url]);
        app(AppState::new(args).unwrap())
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/interactions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn invoke(name: &str) -> Request<Body> {
        post(json!({"data": {"name": name}}))
    }

    async fn json_body(res: axum::response::Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_button_reply_carries_screen() {
        let server = spawn_control_server(ControlServer {
            screen: hex::encode(vec![0x20u8; PixelFormat::Rgba8.frame_len()]),
            ..Default::default()
        })
        .await;

        let res = app_for(&server.url).oneshot(invoke("start")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["type"], "embed");
        assert_eq!(body["image"]["url"], "attachment://screen.png");
        assert_eq!(body["attachment"]["filename"], "screen.png");

        // png signature, hex encoded
        let data = body["attachment"]["data"].as_str().unwrap();
        assert!(data.starts_with("89504e47"));

        assert_eq!(
            server.requests(),
            vec![("start".to_string(), None), ("screen".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn test_spam_end_to_end() {
        let server = spawn_control_server(ControlServer {
            screen: hex::encode(vec![0u8; PixelFormat::Rgba8.frame_len()]),
            ..Default::default()
        })
        .await;
        let req = post(json!({
            "data": {
                "name": "spam",
                "options": [
                    {"name": "button", "value": "u"},
                    {"name": "spam-amount", "value": 2}
                ]
            }
        }));

        let res = app_for(&server.url).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let actions: Vec<_> = server.requests().into_iter().map(|(a, _)| a).collect();
        assert_eq!(actions, ["u", "u", "screen"]);
    }

    #[tokio::test]
    async fn test_bad_spam_is_text_reply() {
        let server = spawn_control_server(ControlServer::default()).await;
        let req = post(json!({
            "data": {
                "name": "spam",
                "options": [
                    {"name": "button", "value": "x"},
                    {"name": "spam-amount", "value": 3}
                ]
            }
        }));

        let res = app_for(&server.url).oneshot(req).await.unwrap();
        let body = json_body(res).await;
        assert_eq!(body, json!({"type": "text", "content": BAD_USAGE_MESSAGE}));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_party_reply() {
        let server = spawn_control_server(ControlServer {
            party: r#"[{"Name":"BOLT","Type":"PIKACHU","Exp":0,"Hp":5,"MaxHp":20,"Level":3,"Status":0}]"#
                .to_string(),
            ..Default::default()
        })
        .await;

        let res = app_for(&server.url)
            .oneshot(invoke("party-count"))
            .await
            .unwrap();
        let body = json_body(res).await;
        assert_eq!(body["title"], "You have 1 Pokemen");
        assert_eq!(
            body["description"],
            "Pokemon 1:\n\tName: BOLT(PIKACHU)\n\tLevel: 3\n\tHp: 5/20\n\n"
        );
    }

    #[tokio::test]
    async fn test_server_error_is_failure_reply() {
        let server = spawn_control_server(ControlServer {
            fail: true,
            ..Default::default()
        })
        .await;

        let res = app_for(&server.url).oneshot(invoke("trainer")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["content"], FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unknown_command_has_no_reply() {
        let server = spawn_control_server(ControlServer::default()).await;
        let res = app_for(&server.url).oneshot(invoke("dance")).await.unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_commands() {
        let req = Request::builder()
            .uri("/commands")
            .body(Body::empty())
            .unwrap();
        let res = app_for("http://localhost:1234")
            .oneshot(req)
            .await
            .unwrap();
        let body = json_body(res).await;
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names.last().map(String::as_str), Some("spam"));
        assert_eq!(body[13]["options"][1]["max_value"], 5);
    }
}
