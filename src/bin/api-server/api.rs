use actix_web::{http::header::ContentType, web, HttpResponse};
use jet_directory::{
    catalog::Catalog,
    data::Operator,
    listing::{filter_and_sort, ListingQuery, SortOrder},
    render::DirectoryPage,
    stats::DirectoryStats,
    suggestion::{Acknowledgement, SuggestionForm},
};

pub(super) struct ApiState {
    catalog: Catalog,
    asset_base: String,
}

impl ApiState {
    pub(super) fn new(catalog: Catalog, asset_base: String) -> Self {
        Self {
            catalog,
            asset_base,
        }
    }

    fn page(
        &self,
        query: &ListingQuery,
        suggestion: &SuggestionForm,
        ack: Option<&Acknowledgement>,
    ) -> HttpResponse {
        let listed = filter_and_sort(self.catalog.list_operators(), query);
        let page = DirectoryPage {
            query,
            operators: &listed,
            suggestion,
            acknowledgement: ack,
            asset_base: &self.asset_base,
        };
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(page.to_string())
    }
}

pub(super) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(suggest_page)
        .service(operators)
        .service(operator)
        .service(operator_reviews)
        .service(reviews)
        .service(stats)
        .service(suggest);
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

#[derive(serde::Deserialize)]
pub(super) struct ListingParams {
    #[serde(default)]
    search: String,
    sort: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct OperatorSummary<'a> {
    id: &'a str,
    name: &'a str,
    logo_id: &'a str,
    hq: &'a str,
    fleet_size: u32,
    website: &'a str,
    average_rating: f64,
    review_count: usize,
}

impl<'a> From<&'a Operator> for OperatorSummary<'a> {
    fn from(op: &'a Operator) -> Self {
        Self {
            id: &op.id,
            name: &op.name,
            logo_id: &op.logo_id,
            hq: &op.hq,
            fleet_size: op.fleet_size,
            website: &op.website,
            average_rating: op.average_rating(),
            review_count: op.review_count(),
        }
    }
}

impl ListingParams {
    /// The page never fails on a hand edited url, unknown orders fall back
    /// to the default.
    fn into_query(self) -> ListingQuery {
        let sort = self
            .sort
            .and_then(|s| match s.parse::<SortOrder>() {
                Ok(sort) => Some(sort),
                Err(e) => {
                    tracing::debug!("fall back to default order: {e}");
                    None
                }
            })
            .unwrap_or_default();
        ListingQuery {
            search: self.search,
            sort,
        }
    }
}

#[actix_web::get("/")]
pub(super) async fn index(
    data: web::Data<ApiState>,
    params: web::Query<ListingParams>,
) -> HttpResponse {
    data.page(
        &params.into_inner().into_query(),
        &SuggestionForm::default(),
        None,
    )
}

#[derive(serde::Deserialize)]
pub(super) struct SuggestionParams {
    #[serde(default)]
    suggestion: String,
    #[serde(default)]
    search: String,
    sort: Option<String>,
}

#[actix_web::post("/suggestions")]
pub(super) async fn suggest_page(
    data: web::Data<ApiState>,
    params: web::Form<SuggestionParams>,
) -> HttpResponse {
    let SuggestionParams {
        suggestion,
        search,
        sort,
    } = params.into_inner();
    let query = ListingParams { search, sort }.into_query();

    let mut form = SuggestionForm::new(suggestion);
    let ack = form.submit();
    data.page(&query, &form, ack.as_ref())
}

#[actix_web::get("/api/v1/operators")]
pub(super) async fn operators(
    data: web::Data<ApiState>,
    params: web::Query<ListingParams>,
) -> HttpResponse {
    let ListingParams { search, sort } = params.into_inner();
    let sort = match sort.as_deref().map(str::parse::<SortOrder>).transpose() {
        Ok(sort) => sort.unwrap_or_default(),
        Err(err) => {
            return HttpResponse::BadRequest().json(ErrJsonResp {
                message: err.to_string(),
            })
        }
    };

    let query = ListingQuery { search, sort };
    let listed: Vec<OperatorSummary> = filter_and_sort(data.catalog.list_operators(), &query)
        .into_iter()
        .map(OperatorSummary::from)
        .collect();
    HttpResponse::Ok().json(listed)
}

#[derive(serde::Deserialize)]
pub(super) struct OperatorPath {
    id: String,
}

#[actix_web::get("/api/v1/operators/{id}")]
pub(super) async fn operator(
    data: web::Data<ApiState>,
    path: web::Path<OperatorPath>,
) -> HttpResponse {
    match data.catalog.get_operator(&path.id) {
        Some(op) => HttpResponse::Ok().json(op),
        None => HttpResponse::NotFound().json(ErrJsonResp {
            message: format!("no operator with id {}", path.id),
        }),
    }
}

#[actix_web::get("/api/v1/operators/{id}/reviews")]
pub(super) async fn operator_reviews(
    data: web::Data<ApiState>,
    path: web::Path<OperatorPath>,
) -> HttpResponse {
    HttpResponse::Ok().json(data.catalog.list_reviews(&path.id))
}

#[actix_web::get("/api/v1/reviews")]
pub(super) async fn reviews(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(data.catalog.list_all_reviews())
}

#[actix_web::get("/api/v1/stats")]
pub(super) async fn stats(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(DirectoryStats::collect(&data.catalog))
}

#[actix_web::post("/api/v1/suggestions")]
pub(super) async fn suggest(form: web::Json<SuggestionForm>) -> HttpResponse {
    let mut form = form.into_inner();
    match form.submit() {
        Some(ack) => HttpResponse::Ok().json(ack),
        None => HttpResponse::NoContent().finish(),
    }
}
