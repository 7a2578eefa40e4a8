use super::*;
use anyhow::Context;
use lnt_core::MailConfig;

/// Delivers a single email. One attempt, no retry.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> anyhow::Result<()>;
}

/// [`Mailer`] for JSON transactional email APIs (`POST {url}/emails`).
pub struct HttpMailer {
    http: reqwest::Client,
    endpoint: String,
    key: String,
}

impl HttpMailer {
    pub fn new(config: &MailConfig, timeout: std::time::Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build mail client")?;
        Ok(Self {
            http,
            endpoint: format!("{}/emails", config.url.trim_end_matches('/')),
            key: config.key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.key)
            .json(email)
            .send()
            .await
            .context("mail api unreachable")?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("mail api returned {}: {}", status, body);
        }
        log::debug!("mail api accepted message to {:?}", email.to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::HttpRequest;
    use actix_web::HttpResponse;
    use actix_web::HttpServer;
    use actix_web::http::header;
    use actix_web::web;

    /// Mail API double: wants the bearer key and rejects one recipient.
    async fn api(req: HttpRequest, body: web::Json<serde_json::Value>) -> HttpResponse {
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if bearer != Some("Bearer mail-key") {
            return HttpResponse::Unauthorized().finish();
        }
        match body["to"][0].as_str() {
            Some("bounce@example.org") => {
                HttpResponse::UnprocessableEntity().body("invalid recipient")
            }
            Some(_) => HttpResponse::Ok().json(serde_json::json!({"id": "msg-1"})),
            None => HttpResponse::BadRequest().finish(),
        }
    }

    async fn serve() -> String {
        let server = HttpServer::new(|| App::new().route("/emails", web::post().to(api)))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/", addr)
    }

    fn mailer(url: String, key: &str) -> HttpMailer {
        let config = MailConfig {
            url,
            key: key.into(),
            from: "site@charity.org".into(),
            to: "info@charity.org".into(),
        };
        HttpMailer::new(&config, std::time::Duration::from_secs(5)).unwrap()
    }

    fn email(to: &str) -> Email {
        Email {
            from: "site@charity.org".into(),
            to: vec![to.into()],
            subject: "Thanks".into(),
            html: "<p>hi</p>".into(),
            reply_to: None,
        }
    }

    #[actix_web::test]
    async fn accepted_message_is_sent() {
        let mailer = mailer(serve().await, "mail-key");
        assert!(mailer.send(&email("ada@example.org")).await.is_ok());
    }

    #[actix_web::test]
    async fn rejected_message_is_an_error() {
        let mailer = mailer(serve().await, "mail-key");
        let error = mailer.send(&email("bounce@example.org")).await.unwrap_err();
        let text = error.to_string();
        assert!(text.contains("422"));
        assert!(text.contains("invalid recipient"));
    }

    #[actix_web::test]
    async fn wrong_key_is_an_error() {
        let mailer = mailer(serve().await, "stale-key");
        let error = mailer.send(&email("ada@example.org")).await.unwrap_err();
        assert!(error.to_string().contains("401"));
    }
}
