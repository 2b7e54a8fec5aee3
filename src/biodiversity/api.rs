use super::{
    model::{BiodiversityFigures, BiodiversityLandUse, Compliance, LandUse, LandUseTrendPoint, Site},
    summary::summarize,
    wire::{BiodiversityDocument, BiodiversityNode, ComplianceNode, LandUseNode, SiteNode, TrendNode},
};
use crate::{
    company::{CompanySummary, require_id},
    core::{
        EsgClient, EsgError, RetryConfig, net,
        wire::{or_na, or_zero, or_zero_u32},
    },
    years::effective_years,
};

pub(super) async fn fetch_biodiversity(
    client: &EsgClient,
    company_id: &str,
    year: Option<i32>,
    retry_override: Option<&RetryConfig>,
) -> Result<BiodiversityLandUse, EsgError> {
    let id = require_id(company_id)?;
    let mut url = client.api_url(&["esg-dashboard", "biodiversity-landuse", id])?;
    if let Some(y) = year {
        url.query_pairs_mut().append_pair("year", &y.to_string());
    }

    let resp = client.send_with_retry(client.get(url), retry_override).await?;
    let text = net::get_text(resp, "biodiversity_landuse").await?;
    let doc: BiodiversityDocument = net::parse_document(&text, "biodiversity-landuse")?;
    Ok(assemble(doc, id))
}

fn assemble(doc: BiodiversityDocument, company_id: &str) -> BiodiversityLandUse {
    let land_use = land_use(doc.land_use.unwrap_or_default());
    let sites: Vec<Site> = doc.sites.unwrap_or_default().into_iter().map(site).collect();

    let mut trend: Vec<LandUseTrendPoint> = doc
        .trend
        .unwrap_or_default()
        .into_iter()
        .filter_map(trend_point)
        .collect();
    trend.sort_by_key(|p| p.year);

    BiodiversityLandUse {
        company: CompanySummary::from_node(doc.company, company_id),
        year: doc.year,
        available_years: effective_years(Vec::new(), doc.available_years.as_deref()),
        summary: summarize(&land_use, &sites, &trend),
        biodiversity: figures(doc.biodiversity.unwrap_or_default()),
        compliance: compliance(doc.compliance.unwrap_or_default()),
        land_use,
        sites,
        trend,
    }
}

fn land_use(node: LandUseNode) -> LandUse {
    LandUse {
        total_area_ha: or_zero(node.total_area_ha),
        protected_area_ha: or_zero(node.protected_area_ha),
        restored_area_ha: or_zero(node.restored_area_ha),
        hve_area_ha: or_zero(node.hve_area_ha),
        conservation_area_ha: or_zero(node.conservation_area_ha),
        agricultural_area_ha: or_zero(node.agricultural_area_ha),
        deforested_area_ha: or_zero(node.deforested_area_ha),
    }
}

fn figures(node: BiodiversityNode) -> BiodiversityFigures {
    BiodiversityFigures {
        species_monitored: or_zero_u32(node.species_monitored),
        threatened_species: or_zero_u32(node.threatened_species),
        iucn_red_list_species: or_zero_u32(node.iucn_red_list_species),
        biodiversity_programmes: or_zero_u32(node.biodiversity_programmes),
        habitats_restored: or_zero_u32(node.habitats_restored),
    }
}

fn compliance(node: ComplianceNode) -> Compliance {
    Compliance {
        hve_compliant: node.hve_compliant,
        no_deforestation_commitment: node.no_deforestation_commitment,
        certifications: node
            .certifications
            .unwrap_or_default()
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect(),
        last_audit_date: or_na(node.last_audit_date),
    }
}

fn site(node: SiteNode) -> Site {
    Site {
        name: or_na(node.name),
        latitude: node.latitude,
        longitude: node.longitude,
        area_ha: or_zero(node.area_ha),
        classification: or_na(node.classification),
    }
}

// Points without a year cannot be placed on the chart axis.
fn trend_point(node: TrendNode) -> Option<LandUseTrendPoint> {
    Some(LandUseTrendPoint {
        year: node.year?,
        protected_area_ha: or_zero(node.protected_area_ha),
        restored_area_ha: or_zero(node.restored_area_ha),
        deforested_area_ha: or_zero(node.deforested_area_ha),
    })
}
