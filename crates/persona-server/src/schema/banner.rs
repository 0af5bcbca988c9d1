//! Service banner returned from `GET /`.

use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to AI Assistant Personality API";

/// One route the API serves.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointView {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Payload of the banner response.
#[derive(Debug, Clone, Serialize)]
pub struct BannerView {
    pub endpoints: &'static [EndpointView],
}

/// Every route, in the order the banner lists them.
pub const ENDPOINTS: &[EndpointView] = &[
    EndpointView {
        method: "GET",
        path: "/api/assistants",
        description: "Get all assistants",
    },
    EndpointView {
        method: "GET",
        path: "/api/assistants/{id}",
        description: "Get assistant by ID",
    },
    EndpointView {
        method: "POST",
        path: "/api/assistants",
        description: "Create new assistant",
    },
    EndpointView {
        method: "PUT",
        path: "/api/assistants/{id}",
        description: "Update assistant (full)",
    },
    EndpointView {
        method: "PATCH",
        path: "/api/assistants/{id}",
        description: "Update assistant (partial)",
    },
    EndpointView {
        method: "DELETE",
        path: "/api/assistants/{id}",
        description: "Delete assistant",
    },
    EndpointView {
        method: "GET",
        path: "/api/assistants/role/{role}",
        description: "Get assistants by role",
    },
];
