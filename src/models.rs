// Request and response payloads for the HTTP API

use serde::{Deserialize, Serialize};

use crate::store::{Message, SanitizedStoreConfig};

/// Fixed timestamp carried by the mock payloads
pub const MOCK_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

// Request Types

/// Body of `POST /api/message`
#[derive(Debug, Clone, Deserialize)]
pub struct MessageIn {
    pub user: String,
    pub message: String,
}

/// Query string of `GET /api/messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<i64>,
}

/// Query string of `GET /api/cofact/check`
#[derive(Debug, Clone, Deserialize)]
pub struct CofactQuery {
    pub text: String,
}

// Service status

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "Fact Check System Backend API",
            status: "running",
        }
    }
}

/// `{"status": "ok"}`, optionally with a message
#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl OkResponse {
    pub fn new() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    pub fn with_message(message: &'static str) -> Self {
        Self {
            status: "ok",
            message: Some(message),
        }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Error envelope shared by every failing route
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            error: None,
            timestamp: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

// Connectivity probe

/// `GET /api/db-test` body; always served with HTTP 200
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DbTestResponse {
    Connected {
        status: &'static str,
        database: &'static str,
        test_result: i32,
        environment_variables: SanitizedStoreConfig,
        connection_info: String,
    },
    Failed {
        status: &'static str,
        database: &'static str,
        error: String,
        error_type: &'static str,
        environment_variables: SanitizedStoreConfig,
        connection_string: String,
    },
}

// Messages

#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageResponse {
    pub status: &'static str,
    pub id: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListMessagesResponse {
    pub status: &'static str,
    pub messages: Vec<Message>,
}

// Session mocks

#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub id: &'static str,
    pub name: &'static str,
    pub session_active: bool,
}

impl UserData {
    pub fn mock() -> Self {
        Self {
            id: "user_123",
            name: "測試用戶",
            session_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub status: &'static str,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub user_data: UserData,
    pub timestamp: &'static str,
}

impl SessionResponse {
    /// Payload for an existing session lookup
    pub fn existing(session_id: String) -> Self {
        Self {
            status: "ok",
            session_id,
            message: None,
            user_data: UserData::mock(),
            timestamp: MOCK_TIMESTAMP,
        }
    }

    /// Payload for a newly created session
    pub fn created(session_id: String) -> Self {
        Self {
            message: Some("Session created successfully"),
            ..Self::existing(session_id)
        }
    }
}

// Cofact mock

#[derive(Debug, Clone, Serialize)]
pub struct CofactResult {
    pub credibility: f64,
    pub source: &'static str,
    pub analysis: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CofactResponse {
    pub status: &'static str,
    pub text: String,
    pub result: CofactResult,
}

impl CofactResponse {
    pub fn mock(text: String) -> Self {
        Self {
            status: "ok",
            text,
            result: CofactResult {
                credibility: 0.8,
                source: "模擬資料",
                analysis: "這是模擬的 Cofact 分析結果",
            },
        }
    }
}

// Multi-agent analysis mock

#[derive(Debug, Clone, Serialize)]
pub struct WeightCalculation {
    pub weights: Vec<f64>,
    pub total_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalReport {
    pub summary: &'static str,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactCheckResult {
    pub credibility: f64,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub category: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub weight_calculation_json: WeightCalculation,
    pub final_report_json: FinalReport,
    pub fact_check_result_json: FactCheckResult,
    pub classification_json: Classification,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub status: &'static str,
    pub analysis_id: &'static str,
    pub result: AnalysisResult,
    pub timestamp: &'static str,
}

impl AnalysisResponse {
    pub fn mock() -> Self {
        Self {
            status: "ok",
            analysis_id: "analysis_123",
            result: AnalysisResult {
                weight_calculation_json: WeightCalculation {
                    weights: vec![0.3, 0.4, 0.3],
                    total_score: 0.75,
                },
                final_report_json: FinalReport {
                    summary: "分析完成",
                    confidence: 0.8,
                },
                fact_check_result_json: FactCheckResult {
                    credibility: 0.8,
                    source: "可信來源",
                },
                classification_json: Classification {
                    category: "新聞",
                    kind: "真實",
                },
            },
            timestamp: MOCK_TIMESTAMP,
        }
    }
}
