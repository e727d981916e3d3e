#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Quit,
    LoadCollections,
    LoadDocuments {
        collection: String,
        query: String,
    },
    LoadFields {
        collection: String,
    },
    CreateDocument {
        collection: String,
        id: String,
        body: String,
    },
    DeleteDocument {
        collection: String,
        id: String,
    },
    Batch(Vec<Command>),
}

impl Command {
    /// Page fetch plus field enumeration for one index/query pair
    pub fn reload(collection: &str, query: &str) -> Self {
        Command::Batch(vec![
            Command::LoadDocuments {
                collection: collection.to_string(),
                query: query.to_string(),
            },
            Command::LoadFields {
                collection: collection.to_string(),
            },
        ])
    }
}
