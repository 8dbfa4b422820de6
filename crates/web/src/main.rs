use fatecast_core::{evaluate, AggregateResult, DuelConfig};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use tiny_http::{Header, Method, Response, Server, StatusCode};

fn main() {
    let server = Server::http("0.0.0.0:7878").expect("start server");
    println!("Fatecast web server on http://localhost:7878");
    for request in server.incoming_requests() {
        if let Err(err) = handle_request(request) {
            eprintln!("request error: {err}");
        }
    }
}

#[derive(Deserialize)]
struct DuelRequest {
    attacker_stat: i64,
    #[serde(default)]
    defender_stat: Option<i64>,
    #[serde(default)]
    target_number: Option<i64>,
    #[serde(default)]
    attacker_modifier: String,
    #[serde(default)]
    defender_modifier: String,
    #[serde(default)]
    duel_type: Option<String>,
}

#[derive(Serialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    duel: DuelEcho,
    result: Option<AggregateResult>,
}

#[derive(Serialize)]
struct DuelEcho {
    attacker_stat: i64,
    defender_stat: Option<i64>,
    target_number: Option<i64>,
    attacker_modifier: String,
    defender_modifier: String,
    duel_type: String,
}

fn handle_request(mut request: tiny_http::Request) -> Result<(), Box<dyn std::error::Error>> {
    let method = request.method().clone();
    let url = request.url().to_string();
    match (method, url.as_str()) {
        (Method::Get, "/") => {
            respond_with_file(request, web_path("index.html"), "text/html; charset=utf-8")
        }
        (Method::Get, "/app.js") => {
            respond_with_file(request, web_path("app.js"), "application/javascript")
        }
        (Method::Get, "/styles.css") => {
            respond_with_file(request, web_path("styles.css"), "text/css; charset=utf-8")
        }
        (Method::Post, "/api/duel") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let duel: DuelRequest = serde_json::from_str(&body)?;
            respond_json(request, run_duel(duel))
        }
        _ => {
            request.respond(Response::empty(StatusCode(404)))?;
            Ok(())
        }
    }
}

/// Applies the form's duel-type toggle before handing off to the engine:
/// a simple duel drops the defender, a plain opposed duel drops the
/// target number, and `opposed_with_tn` keeps both.
fn run_duel(req: DuelRequest) -> ApiResponse {
    let duel_type = req.duel_type.unwrap_or_else(|| "opposed".to_string());
    let defender_stat = if duel_type == "simple" {
        None
    } else {
        req.defender_stat
    };
    let target_number = if duel_type == "opposed" {
        None
    } else {
        req.target_number
    };
    let outcome = DuelConfig::from_tokens(
        req.attacker_stat,
        defender_stat,
        target_number,
        &req.attacker_modifier,
        &req.defender_modifier,
    )
    .and_then(|config| evaluate(&config));
    let echo = DuelEcho {
        attacker_stat: req.attacker_stat,
        defender_stat,
        target_number,
        attacker_modifier: req.attacker_modifier,
        defender_modifier: req.defender_modifier,
        duel_type,
    };
    match outcome {
        Ok(result) => ApiResponse {
            ok: true,
            error: None,
            duel: echo,
            result: Some(result),
        },
        Err(err) => ApiResponse {
            ok: false,
            error: Some(err.to_string()),
            duel: echo,
            result: None,
        },
    }
}

fn web_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("web")
        .join(file)
}

fn respond_with_file(
    request: tiny_http::Request,
    path: PathBuf,
    content_type: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = std::fs::File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    let header = Header::from_bytes(&b"Content-Type"[..], content_type)
        .map_err(|()| "invalid content-type header")?;
    request.respond(Response::from_data(content).with_header(header))?;
    Ok(())
}

fn respond_json(
    request: tiny_http::Request,
    response: ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&response)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|()| "invalid content-type header")?;
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}
