//! Embedded API documentation endpoints.
//!
//! The Swagger UI shell loads its assets from a CDN and reads the OpenAPI
//! document from /swagger.json, so nothing is served from disk.

use axum::{
    Json,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Backend API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        html { box-sizing: border-box; overflow: -moz-scrollbars-vertical; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin:0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            const ui = SwaggerUIBundle({
                url: "/swagger.json",
                dom_id: "#swagger-ui",
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>"##;

/// GET /swagger - interactive Swagger UI page
pub async fn swagger_ui() -> Response {
    Html(SWAGGER_UI_HTML).into_response()
}

/// GET /swagger.json - OpenAPI 3.0 document for the test project API
pub async fn swagger_json() -> Response {
    let spec = json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Backend API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Test project CRUD API"
        },
        "paths": {
            "/api/test": {
                "get": {
                    "summary": "Get all test projects",
                    "responses": {
                        "200": {
                            "description": "List of test projects",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/TestProject" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a new test project",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/TestProjectInput" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Created test project",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/TestProject" }
                                }
                            }
                        },
                        "400": { "description": "Name missing or empty" }
                    }
                }
            },
            "/api/test/{id}": {
                "get": {
                    "summary": "Get test project by ID",
                    "parameters": [ { "$ref": "#/components/parameters/Id" } ],
                    "responses": {
                        "200": {
                            "description": "Test project found",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/TestProject" }
                                }
                            }
                        },
                        "400": { "description": "Invalid id" },
                        "404": { "description": "Test project not found" }
                    }
                },
                "put": {
                    "summary": "Update test project",
                    "parameters": [ { "$ref": "#/components/parameters/Id" } ],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/TestProjectInput" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Updated test project" },
                        "400": { "description": "Invalid id or name" },
                        "404": { "description": "Test project not found" }
                    }
                },
                "delete": {
                    "summary": "Delete test project",
                    "parameters": [ { "$ref": "#/components/parameters/Id" } ],
                    "responses": {
                        "200": { "description": "Deleted successfully" },
                        "400": { "description": "Invalid id" },
                        "404": { "description": "Test project not found" }
                    }
                }
            }
        },
        "components": {
            "parameters": {
                "Id": {
                    "name": "id",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "integer", "format": "int64" }
                }
            },
            "schemas": {
                "TestProject": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" }
                    }
                },
                "TestProjectInput": {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string" }
                    }
                }
            }
        }
    });

    Json(spec).into_response()
}
