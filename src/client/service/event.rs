use crate::{
    client::http::{api_paths::event_items, HttpClient, HttpClientError},
    model::catalog::{EventCategoryDto, EventItemDto, EventTypeDto, PageDto},
};

/// Option of a filter drop-down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Filter value, `None` for the "All" entry.
    pub value: Option<i32>,
    pub text: String,
    pub selected: bool,
}

impl SelectOption {
    /// The leading entry removing the filter, selected by default.
    pub fn all() -> Self {
        Self {
            value: None,
            text: "All".to_string(),
            selected: true,
        }
    }
}

/// Reads the event catalog from the event items API.
#[derive(Clone, Debug)]
pub struct EventService {
    client: HttpClient,
    base_uri: String,
}

impl EventService {
    /// Creates an event service for the API at `base_uri`, e.g. `http://host/api/eventitems/`.
    pub fn new(client: HttpClient, base_uri: impl Into<String>) -> Self {
        Self {
            client,
            base_uri: base_uri.into(),
        }
    }

    /// Retrieves a page of events, filtered by category or type.
    ///
    /// The API filters by one lookup at a time; when both are set the category wins.
    pub async fn get_event_items(
        &self,
        page: u64,
        size: u64,
        category: Option<i32>,
        event_type: Option<i32>,
    ) -> Result<PageDto<EventItemDto>, HttpClientError> {
        let uri = match (category, event_type) {
            (Some(category), _) => {
                event_items::items_by_category(&self.base_uri, category, page, size)
            }
            (None, Some(event_type)) => {
                event_items::items_by_type(&self.base_uri, event_type, page, size)
            }
            (None, None) => event_items::items(&self.base_uri, page, size),
        };

        self.client.get(&uri, None).await?.error_for_status()?.json()
    }

    /// Event types as drop-down options, led by "All".
    pub async fn get_event_types(&self) -> Result<Vec<SelectOption>, HttpClientError> {
        let uri = event_items::event_types(&self.base_uri);
        let types: Vec<EventTypeDto> = self.client.get(&uri, None).await?.error_for_status()?.json()?;

        Ok(with_all_option(types.into_iter().map(|t| (t.id, t.name))))
    }

    /// Event categories as drop-down options, led by "All".
    pub async fn get_event_categories(&self) -> Result<Vec<SelectOption>, HttpClientError> {
        let uri = event_items::event_categories(&self.base_uri);
        let categories: Vec<EventCategoryDto> =
            self.client.get(&uri, None).await?.error_for_status()?.json()?;

        Ok(with_all_option(
            categories.into_iter().map(|c| (c.id, c.name)),
        ))
    }
}

fn with_all_option(entries: impl Iterator<Item = (i32, String)>) -> Vec<SelectOption> {
    std::iter::once(SelectOption::all())
        .chain(entries.map(|(id, name)| SelectOption {
            value: Some(id),
            text: name,
            selected: false,
        }))
        .collect()
}
