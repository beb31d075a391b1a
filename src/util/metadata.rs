//! Profile-derived document metadata: SEO, social preview, and JSON-LD.

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

use serde::Serialize;

use crate::config::{Profile, SiteConfig};
use crate::error::Result;
use crate::util::head::{DocumentSurface, HeadEntry, HeadSlot, reconcile};

/// schema.org `Person` record embedded as structured data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub address: PostalAddress,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "addressLocality")]
    pub locality: String,
    #[serde(rename = "addressCountry")]
    pub country: String,
}

impl PersonSchema {
    pub fn from_profile(profile: &Profile, config: &SiteConfig) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: profile.name.to_owned(),
            job_title: profile.role.to_owned(),
            description: profile.description.to_owned(),
            image: config.absolute_url(profile.image),
            url: config.site_url.to_owned(),
            address: PostalAddress {
                kind: "PostalAddress",
                locality: profile.locality.to_owned(),
                country: profile.country.to_owned(),
            },
            same_as: profile.same_as.iter().map(|&url| url.to_owned()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The full set of managed head entries for a profile.
pub fn profile_entries(profile: &Profile, config: &SiteConfig) -> Result<Vec<HeadEntry>> {
    let title = profile.title();
    let image_url = config.absolute_url(profile.image);
    let schema = PersonSchema::from_profile(profile, config).to_json()?;

    Ok(vec![
        HeadEntry::new(HeadSlot::Lang, config.lang),
        HeadEntry::new(HeadSlot::Title, title.clone()),
        HeadEntry::new(HeadSlot::Link("icon"), profile.image),
        HeadEntry::new(HeadSlot::Link("apple-touch-icon"), profile.image),
        HeadEntry::new(HeadSlot::Link("canonical"), config.site_url),
        HeadEntry::new(HeadSlot::MetaName("description"), profile.description),
        HeadEntry::new(HeadSlot::MetaName("author"), profile.name),
        // Open Graph
        HeadEntry::new(HeadSlot::MetaProperty("og:title"), title.clone()),
        HeadEntry::new(HeadSlot::MetaProperty("og:description"), profile.description),
        HeadEntry::new(HeadSlot::MetaProperty("og:type"), "website"),
        HeadEntry::new(HeadSlot::MetaProperty("og:url"), config.site_url),
        HeadEntry::new(HeadSlot::MetaProperty("og:image"), image_url.clone()),
        HeadEntry::new(HeadSlot::MetaProperty("og:site_name"), profile.site_name()),
        // Twitter Card
        HeadEntry::new(HeadSlot::MetaName("twitter:card"), "summary_large_image"),
        HeadEntry::new(HeadSlot::MetaName("twitter:title"), title),
        HeadEntry::new(HeadSlot::MetaName("twitter:description"), profile.description),
        HeadEntry::new(HeadSlot::MetaName("twitter:image"), image_url),
        HeadEntry::new(HeadSlot::JsonLd, schema),
    ])
}

/// Bring the document head in line with the profile. Returns slots written.
pub fn sync<D: DocumentSurface + ?Sized>(doc: &mut D, profile: &Profile, config: &SiteConfig) -> Result<usize> {
    let entries = profile_entries(profile, config)?;
    Ok(reconcile(doc, &entries))
}

/// Run `sync` against the live document.
pub fn sync_browser(profile: &Profile, config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        match sync(&mut crate::util::browser::BrowserDocument, profile, config) {
            Ok(applied) => log::info!("metadata: synchronized {applied} head slots"),
            Err(e) => log::warn!("metadata: sync failed: {e}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _unused = (profile, config);
    }
}
