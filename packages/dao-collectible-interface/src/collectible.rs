use cosmwasm_schema::cw_serde;

/// The category a collectible was minted under. Only fixed-supply and
/// immutable collectibles may be enrolled as voting units.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum CollectibleKind {
    /// Minted into a collection with a hard supply cap.
    FixedSupply,
    /// Token data may never be mutated after mint.
    Immutable,
    /// Minted into a collection without a supply cap.
    OpenEdition,
    /// Token data may be mutated by the creator.
    Mutable,
}

impl CollectibleKind {
    pub fn is_eligible(&self) -> bool {
        matches!(self, CollectibleKind::FixedSupply | CollectibleKind::Immutable)
    }
}

impl std::fmt::Display for CollectibleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectibleKind::FixedSupply => write!(f, "fixed_supply"),
            CollectibleKind::Immutable => write!(f, "immutable"),
            CollectibleKind::OpenEdition => write!(f, "open_edition"),
            CollectibleKind::Mutable => write!(f, "mutable"),
        }
    }
}

/// Identifies a single collectible: the collection it belongs to (its
/// creator and name), the item name and the edition.
#[cw_serde]
#[derive(Eq)]
pub struct CollectibleId {
    /// The address that created the collection.
    pub creator: String,
    /// The name of the collection within the creator's namespace.
    pub collection: String,
    /// The item name within the collection.
    pub name: String,
    /// The edition of the item.
    pub edition: u64,
    /// The category tag the item was minted under.
    pub kind: CollectibleKind,
}

impl CollectibleId {
    /// Returns true if this collectible belongs to the collection
    /// `collection` created by `creator`.
    pub fn is_in_collection(&self, creator: &str, collection: &str) -> bool {
        self.creator == creator && self.collection == collection
    }
}

impl std::fmt::Display for CollectibleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}#{}",
            self.creator, self.collection, self.name, self.edition
        )
    }
}
