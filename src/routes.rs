use std::fmt;

/// Pages of the recipe site, as paths a shell can navigate to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Dashboard,
    /// Detail page of a recipe
    Recipe(String),
    /// Page that hosts a blank recipe form
    CreateRecipe,
    UserRecipe {
        user_id: String,
        recipe_id: String,
    },
    /// Version history of a recipe
    Versions(String),
    VersionDetail {
        recipe_id: String,
        version_id: String,
    },
    ImageUpload,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Recipe(id) => format!("/recipe/{}", id),
            Route::CreateRecipe => "/recipe/new".to_string(),
            Route::UserRecipe { user_id, recipe_id } => {
                format!("/user/{}/recipe/{}", user_id, recipe_id)
            }
            Route::Versions(id) => format!("/versions/{}", id),
            Route::VersionDetail {
                recipe_id,
                version_id,
            } => format!("/versions/{}/{}", recipe_id, version_id),
            Route::ImageUpload => "/upload".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_detail_path() {
        assert_eq!(Route::Recipe("abc".to_string()).path(), "/recipe/abc");
        assert_eq!(Route::Recipe("abc".to_string()).to_string(), "/recipe/abc");
    }

    #[test]
    fn test_static_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::CreateRecipe.path(), "/recipe/new");
        assert_eq!(Route::ImageUpload.path(), "/upload");
    }

    #[test]
    fn test_nested_paths() {
        let route = Route::VersionDetail {
            recipe_id: "r1".to_string(),
            version_id: "v2".to_string(),
        };
        assert_eq!(route.path(), "/versions/r1/v2");

        let route = Route::UserRecipe {
            user_id: "u1".to_string(),
            recipe_id: "r1".to_string(),
        };
        assert_eq!(route.path(), "/user/u1/recipe/r1");
    }
}
