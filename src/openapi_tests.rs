#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("TemperatureReport"));
        assert!(components.schemas.contains_key("ComparisonRow"));
        assert!(components.schemas.contains_key("HistoricalRow"));

        // Verify that the schema can be serialized to JSON without errors
        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_temperature_report_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let report_schema = components.schemas.get("TemperatureReport").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = report_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("country_name"));
            assert!(properties.contains_key("comparison"));
            assert!(properties.contains_key("history"));
        } else {
            panic!("TemperatureReport should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();

        for path in ["/", "/health", "/api/v1/temperatures"] {
            let item = openapi
                .paths
                .paths
                .get(path)
                .unwrap_or_else(|| panic!("{path} is not documented"));
            let get = item
                .operations
                .get(&utoipa::openapi::PathItemType::Get)
                .unwrap_or_else(|| panic!("{path} has no GET operation"));

            assert!(get.responses.responses.contains_key("200"));
            assert!(get.responses.responses.contains_key("500"));
        }
    }

    #[test]
    fn test_report_endpoints_document_country_parameter() {
        let openapi = ApiDoc::openapi();
        let json = serde_json::to_value(&openapi).unwrap();

        for path in ["/", "/api/v1/temperatures"] {
            let params = json["paths"][path]["get"]["parameters"]
                .as_array()
                .unwrap_or_else(|| panic!("{path} has no parameters"));
            assert!(params.iter().any(|p| p["name"] == "countryName" && p["in"] == "query"));
        }
    }
}
