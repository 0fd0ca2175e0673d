use axum::response::{Html, Json};
use serde_json::json;

pub async fn get_api_docs() -> Html<&'static str> {
    Html(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cars Dealer API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: '/docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [SwaggerUIBundle.presets.apis]
            });
        };
    </script>
</body>
</html>
"#,
    )
}

pub async fn get_openapi_spec() -> Json<serde_json::Value> {
    Json(openapi_spec())
}

fn envelope_schema(data: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["status"],
        "properties": {
            "status": {"type": "string", "enum": ["success", "fail"]},
            "message": {"type": "string"},
            "data": data
        }
    })
}

fn json_content(schema: serde_json::Value) -> serde_json::Value {
    json!({"application/json": {"schema": schema}})
}

pub fn openapi_spec() -> serde_json::Value {
    let car_ref = json!({"$ref": "#/components/schemas/Car"});
    let fail = json!({
        "description": "Fail envelope",
        "content": json_content(json!({"$ref": "#/components/schemas/FailResult"}))
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Cars Dealer API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Car inventory records and purchase discounts"
        },
        "paths": {
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {"200": {"description": "Service is healthy"}}
                }
            },
            "/api/cars": {
                "get": {
                    "summary": "List all cars",
                    "responses": {
                        "200": {
                            "description": "Cars in stock",
                            "content": json_content(envelope_schema(json!({"type": "array", "items": car_ref})))
                        },
                        "204": {"description": "No cars in stock"},
                        "500": fail
                    }
                },
                "post": {
                    "summary": "Add a car",
                    "requestBody": {"required": true, "content": json_content(car_ref.clone())},
                    "responses": {
                        "200": {
                            "description": "Id of the new car",
                            "content": json_content(envelope_schema(json!({"type": "integer"})))
                        },
                        "400": fail
                    }
                },
                "put": {
                    "summary": "Update a car",
                    "requestBody": {"required": true, "content": json_content(car_ref.clone())},
                    "responses": {
                        "200": {
                            "description": "Update acknowledged",
                            "content": json_content(envelope_schema(json!({"type": "boolean"})))
                        },
                        "400": {
                            "description": "Missing id (plain text) or fail envelope",
                            "content": {
                                "text/plain": {"schema": {"type": "string"}},
                                "application/json": {"schema": {"$ref": "#/components/schemas/FailResult"}}
                            }
                        }
                    }
                }
            },
            "/api/cars/discount": {
                "post": {
                    "summary": "Calculate the discount for a batch of cars",
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({"type": "array", "items": car_ref}))
                    },
                    "responses": {
                        "200": {
                            "description": "Discount for the batch",
                            "content": json_content(envelope_schema(json!({"$ref": "#/components/schemas/Discount"})))
                        },
                        "400": {
                            "description": "Batch does not match the inventory (fail envelope) or is empty (no body)"
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Car": {
                    "type": "object",
                    "required": ["make", "model", "year", "countryManufactured", "colour", "price"],
                    "properties": {
                        "id": {"type": "integer", "format": "int32"},
                        "make": {"type": "string"},
                        "model": {"type": "string"},
                        "year": {"type": "integer", "format": "int32"},
                        "countryManufactured": {"type": "string"},
                        "colour": {"type": "string"},
                        "price": {"type": "number"}
                    }
                },
                "Discount": {
                    "type": "object",
                    "properties": {
                        "discountRate": {"type": "integer"},
                        "discountAmount": {"type": "number"},
                        "priceAfterDiscount": {"type": "number"}
                    }
                },
                "FailResult": envelope_schema(json!({}))
            }
        }
    })
}
