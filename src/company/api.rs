use super::{
    model::{Company, CompanyDraft},
    wire::CompanyNode,
};
use crate::{
    core::{
        EsgClient, EsgError, RetryConfig, net,
        wire::{non_blank, or_na},
    },
    storage::ImageUpload,
};

pub(super) enum SaveTarget<'a> {
    Create,
    Update(&'a str),
}

fn company_from_node(node: CompanyNode) -> Option<Company> {
    Some(Company {
        id: node.id?,
        name: or_na(node.name),
        industry: or_na(node.industry),
        country: or_na(node.country),
        description: non_blank(node.description),
        logo_url: non_blank(node.logo_url),
        year_range: non_blank(node.year_range),
        latest_report_year: node.latest_report_year,
    })
}

pub(crate) fn require_id(company_id: &str) -> Result<&str, EsgError> {
    let id = company_id.trim();
    if id.is_empty() {
        return Err(EsgError::Validation("Please select a company.".into()));
    }
    Ok(id)
}

pub(super) async fn list_companies(
    client: &EsgClient,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Company>, EsgError> {
    let url = client.api_url(&["companies"])?;
    let resp = client.send_with_retry(client.get(url), retry_override).await?;
    let text = net::get_text(resp, "companies").await?;
    let nodes: Vec<CompanyNode> = net::parse_document(&text, "companies")?;

    let total = nodes.len();
    let companies: Vec<Company> = nodes.into_iter().filter_map(company_from_node).collect();
    if companies.len() < total {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            skipped = total - companies.len(),
            "skipping company records without an id"
        );
    }
    Ok(companies)
}

pub(super) async fn get_company(
    client: &EsgClient,
    company_id: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<Company, EsgError> {
    let id = require_id(company_id)?;
    let url = client.api_url(&["companies", id])?;
    let resp = client.send_with_retry(client.get(url), retry_override).await?;
    let text = net::get_text(resp, "company").await?;
    let node: CompanyNode = net::parse_document(&text, "company")?;
    company_from_node(node).ok_or_else(|| EsgError::Data("company record has no id".into()))
}

pub(super) async fn save_company(
    client: &EsgClient,
    target: SaveTarget<'_>,
    draft: &CompanyDraft,
    logo: Option<ImageUpload>,
) -> Result<Company, EsgError> {
    draft.validate()?;
    if let Some(upload) = &logo {
        upload.validate()?;
    }
    let mut body = draft.normalized();

    let req = match target {
        SaveTarget::Create => client.post(client.api_url(&["companies"])?),
        SaveTarget::Update(id) => client.put(client.api_url(&["companies", require_id(id)?])?),
    };

    if let Some(upload) = logo {
        body.logo_url = Some(client.upload_image(upload).await?);
    }

    let resp = client.send_once(req.json(&body)).await?;
    let text = net::get_text(resp, "company_save").await?;
    let node: CompanyNode = net::parse_document(&text, "company")?;
    company_from_node(node).ok_or_else(|| EsgError::Data("saved company has no id".into()))
}
