use axum::{extract::Path, response::Json};

use crate::errors::ServiceError;
use crate::reference::{
    breeds::{find_breed, BreedProfile, BREEDS},
    diseases::{DiseaseProfile, DISEASES},
    feeds::{FeedCategory, FEED_CATEGORIES},
    schemes::{GovernmentScheme, SCHEMES},
    vaccines::{VaccineTemplate, VACCINES},
};
use crate::{ApiResponse, ApiResult};

pub async fn breeds() -> ApiResult<&'static [BreedProfile]> {
    Ok(Json(ApiResponse::success(BREEDS)))
}

pub async fn breed_by_name(Path(name): Path<String>) -> ApiResult<&'static BreedProfile> {
    let breed = find_breed(&name)
        .ok_or_else(|| ServiceError::NotFound(format!("breed '{name}' not found")))?;
    Ok(Json(ApiResponse::success(breed)))
}

pub async fn feeds() -> ApiResult<&'static [FeedCategory]> {
    Ok(Json(ApiResponse::success(FEED_CATEGORIES)))
}

pub async fn diseases() -> ApiResult<&'static [DiseaseProfile]> {
    Ok(Json(ApiResponse::success(DISEASES)))
}

pub async fn schemes() -> ApiResult<&'static [GovernmentScheme]> {
    Ok(Json(ApiResponse::success(SCHEMES)))
}

pub async fn vaccines() -> ApiResult<&'static [VaccineTemplate]> {
    Ok(Json(ApiResponse::success(VACCINES)))
}
