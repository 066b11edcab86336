//! Static asset and SPA shell serving
//!
//! For paths outside the API namespace:
//! 1. no build directory: placeholder message
//! 2. under the bundle prefix (`/static/`): the bundle file or 404
//! 3. a file at the build root (icons, manifest): that file
//! 4. anything else: the entry document, so client-side routing takes over

use crate::api::{json_response, ApiError, MessageBody};
use crate::config::{AppState, BuildRoot};
use crate::handler::router::RequestContext;
use crate::http::{self, cache};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Served at `/` when the SPA has not been built
pub const WELCOME_MESSAGE: &str = "歡迎來到 Kyle 的個人網站 API";

/// Served at every other non-API path when the SPA has not been built
pub const NOT_BUILT_MESSAGE: &str = "React 應用程式尚未建置，請先執行 npm run build";

/// Resolve a non-API request against the build directory
pub async fn serve(ctx: &RequestContext, state: &AppState) -> Response<Full<Bytes>> {
    let Some(build) = state.build.as_ref() else {
        return placeholder(&ctx.raw_path);
    };

    let Some(relative) = ctx.path.as_deref().map(|p| p.trim_start_matches('/')) else {
        return serve_entry(ctx, state, build).await;
    };

    let bundle_prefix = format!("{}/", state.config.assets.spa_static_prefix.trim_matches('/'));
    if let Some(asset) = relative.strip_prefix(bundle_prefix.as_str()) {
        return serve_bundle_asset(ctx, build, asset).await;
    }

    if relative.is_empty() || relative == state.config.assets.entry_document {
        return serve_entry(ctx, state, build).await;
    }

    match build.root.load(relative).await {
        Some((content, content_type)) => file_response(ctx, content, content_type),
        None => serve_entry(ctx, state, build).await,
    }
}

/// Bundle files are never answered with the shell
async fn serve_bundle_asset(
    ctx: &RequestContext,
    build: &BuildRoot,
    asset: &str,
) -> Response<Full<Bytes>> {
    let Some(bundle) = build.bundle.as_ref() else {
        return ApiError::AssetNotFound.into_response();
    };
    match bundle.load(asset).await {
        Some((content, content_type)) => file_response(ctx, content, content_type),
        None => ApiError::AssetNotFound.into_response(),
    }
}

async fn serve_entry(
    ctx: &RequestContext,
    state: &AppState,
    build: &BuildRoot,
) -> Response<Full<Bytes>> {
    let entry = &state.config.assets.entry_document;
    match build.root.load(entry).await {
        Some((content, content_type)) => http::build_file_response(
            content,
            content_type,
            cache::ENTRY_CACHE_CONTROL,
            ctx.if_none_match.as_deref(),
        ),
        None => {
            logger::log_warning(&format!(
                "Entry document '{entry}' missing from {}",
                build.root.path().display()
            ));
            placeholder(&ctx.raw_path)
        }
    }
}

fn file_response(
    ctx: &RequestContext,
    content: Vec<u8>,
    content_type: &'static str,
) -> Response<Full<Bytes>> {
    http::build_file_response(
        content,
        content_type,
        cache::ASSET_CACHE_CONTROL,
        ctx.if_none_match.as_deref(),
    )
}

fn placeholder(raw_path: &str) -> Response<Full<Bytes>> {
    let message = if raw_path == "/" {
        WELCOME_MESSAGE
    } else {
        NOT_BUILT_MESSAGE
    };
    json_response(StatusCode::OK, &MessageBody { message })
}
