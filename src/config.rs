use std::time::Duration;

/// Parameters for the image-analysis stages.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Alpha value a patch pixel must carry to count as part of the silhouette.
    pub opaque_alpha: u8,
    /// Packed RGBA colour marking the fillable notch in the background.
    pub sentinel: u32,
    /// The tracer gives up after `step_limit_factor * width * height` steps.
    pub step_limit_factor: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            opaque_alpha: 0xFF,
            sentinel: 0xFFFF_FFFF,
            step_limit_factor: 4,
        }
    }
}

/// Endpoints and fixed form values of the tracking portal.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Scheme and host, e.g. `http://yjcx.ems.com.cn`.
    pub server_url: String,
    /// Query page that hands out the session cookie.
    pub page_path: String,
    /// Endpoint returning the captcha JSON.
    pub challenge_path: String,
    /// Endpoint that checks the submitted slide offset.
    pub answer_path: String,
    /// Value of the `selectType` form field.
    pub select_type: String,
    /// Value of the `text[]` form field.
    pub text: String,
    pub timeout: Duration,
    pub solve: SolveConfig,
}

impl PortalConfig {
    pub fn page_url(&self) -> String {
        format!("{}{}", self.server_url, self.page_path)
    }

    pub fn challenge_url(&self) -> String {
        format!("{}{}", self.server_url, self.challenge_path)
    }

    pub fn answer_url(&self) -> String {
        format!("{}{}", self.server_url, self.answer_path)
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            server_url: "http://yjcx.ems.com.cn".to_string(),
            page_path: "/qps/yjcx".to_string(),
            challenge_path: "/qps/showPicture/verify/slideVerifyLoad".to_string(),
            answer_path: "/qps/showPicture/verify/slideVerifyCheck".to_string(),
            select_type: "1".to_string(),
            text: "1234567890".to_string(),
            timeout: Duration::from_secs(15),
            solve: SolveConfig::default(),
        }
    }
}
