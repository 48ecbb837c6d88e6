//! Common test fixtures: a realistic settings page definition

use settings_forms::SettingsSchema;

/// Profile page: identity section (name, email, site) plus an account
/// section (age, password, newsletter opt-in)
pub fn profile_schema() -> SettingsSchema {
    SettingsSchema::from_value(serde_json::json!({
        "page": "profile",
        "group": "profile_settings",
        "option_name": "profile_options",
        "sections": {
            "identity": {
                "title": "Identity",
                "description": "Who you are",
                "fields": {
                    "name": {
                        "title": "Display Name",
                        "validation": "required maxlen:10"
                    },
                    "email": {
                        "title": "Email",
                        "validation": "email"
                    },
                    "site": {
                        "title": "Website",
                        "validation": "website"
                    }
                }
            },
            "account": {
                "title": "Account",
                "fields": {
                    "age": {
                        "title": "Age",
                        "validation": "numeric minval:0 maxval:120"
                    },
                    "password": {
                        "title": "Password",
                        "type": "password",
                        "validation": "minlen:8"
                    },
                    "newsletter": {
                        "title": "Newsletter",
                        "type": "checkbox",
                        "value": "1"
                    }
                }
            }
        }
    }))
    .expect("fixture schema must build")
}
