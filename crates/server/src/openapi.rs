use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct LikedIdDoc { pub id: String }

#[derive(ToSchema)]
pub struct CompanyIdsDoc { pub company_ids: Vec<i32> }

#[derive(ToSchema)]
pub struct CollectionMetadataDoc { pub id: Uuid, pub collection_name: String }

#[derive(ToSchema)]
pub struct CompanyDoc { pub id: i32, pub company_name: String, pub liked: bool }

#[derive(ToSchema)]
pub struct CollectionDoc {
    pub id: Uuid,
    pub collection_name: String,
    pub companies: Vec<CompanyDoc>,
    pub total: u64,
}

#[derive(ToSchema)]
pub struct CompanyBatchDoc {
    pub companies: Vec<CompanyDoc>,
    pub total: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::collections::get_liked_collection_id,
        crate::routes::collections::list_collections,
        crate::routes::collections::get_collection,
        crate::routes::collections::get_collection_company_ids,
        crate::routes::collections::add_liked,
        crate::routes::collections::remove_liked,
        crate::routes::collections::add_my_list,
        crate::routes::companies::list_companies,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            LikedIdDoc,
            CompanyIdsDoc,
            CollectionMetadataDoc,
            CompanyDoc,
            CollectionDoc,
            CompanyBatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "collections"),
        (name = "companies")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_collection_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/collections", "/collections/liked-id", "/collections/{collection_id}", "/collections/add-liked", "/collections/remove-liked"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
