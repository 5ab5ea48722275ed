use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://www2.bmf.com.br/pages/portal/bmfbovespa/lumis/lum-ajustes-do-pregao-ptBR.asp";
pub const DEFAULT_ORIGIN: &str = "https://www2.bmf.com.br";
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.6";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";
pub const DEFAULT_DATE_FIELD: &str = "dData1";
pub const DEFAULT_TABLE_ID: &str = "tblDadosAjustes";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub origin: String,
    pub accept: String,
    pub accept_language: String,
    pub user_agent: String,
    /// Name of the form field carrying the DD/MM/YYYY date.
    pub date_field: String,
    /// `id` attribute of the settlement table in the returned page.
    pub table_id: String,
    pub request_timeout: Duration,
    pub request_delay: Duration,
    pub days: usize,
    pub backward: bool,
    /// Consecutive business days without data before the date walk gives up.
    pub max_empty_days: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            date_field: DEFAULT_DATE_FIELD.to_string(),
            table_id: DEFAULT_TABLE_ID.to_string(),
            request_timeout: Duration::from_secs(30),
            request_delay: Duration::from_secs(1),
            days: 1,
            backward: false,
            max_empty_days: 30,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_date_field(mut self, field: &str) -> Self {
        self.date_field = field.to_string();
        self
    }

    pub fn with_table_id(mut self, table_id: &str) -> Self {
        self.table_id = table_id.to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    pub fn with_backward(mut self, backward: bool) -> Self {
        self.backward = backward;
        self
    }

    pub fn with_max_empty_days(mut self, max: usize) -> Self {
        self.max_empty_days = max;
        self
    }

    /// Static header set sent with every request.
    pub fn request_headers(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("accept", self.accept.as_str()),
            ("accept-language", self.accept_language.as_str()),
            ("cache-control", "max-age=0"),
            ("content-type", "application/x-www-form-urlencoded"),
            ("origin", self.origin.as_str()),
            ("user-agent", self.user_agent.as_str()),
        ]
    }
}
