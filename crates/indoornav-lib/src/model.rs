use serde::{Deserialize, Serialize};

/// String identifier for a node, unique within one institution.
pub type NodeId = String;

/// String identifier for a floor.
pub type FloorId = String;

/// String identifier for a building.
pub type BuildingId = String;

/// 2-D position in floor-normalized coordinates (each axis in [0, 1]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Closed set of node categories recognised by the map editor.
///
/// `Connector`, `Stairs`, `Elevator` and `Outdoor` nodes may declare a
/// link to a node elsewhere in the institution; the flattener turns that
/// link into a virtual edge. `Ramp` is walkable within its floor only and
/// never bridges scopes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    #[default]
    Normal,
    Hidden,
    Connector,
    Stairs,
    Elevator,
    Ramp,
    EmergencyExit,
    Restricted,
    Outdoor,
}

impl NodeType {
    /// Whether a declared `connects_to_node_id` on a node of this type
    /// yields a virtual edge during flattening.
    pub fn bridges_scopes(self) -> bool {
        matches!(
            self,
            NodeType::Connector | NodeType::Stairs | NodeType::Elevator | NodeType::Outdoor
        )
    }

    /// Snake-case name of the type, matching its serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Normal => "normal",
            NodeType::Hidden => "hidden",
            NodeType::Connector => "connector",
            NodeType::Stairs => "stairs",
            NodeType::Elevator => "elevator",
            NodeType::Ramp => "ramp",
            NodeType::EmergencyExit => "emergency_exit",
            NodeType::Restricted => "restricted",
            NodeType::Outdoor => "outdoor",
        }
    }
}

/// A navigable point within one floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub floor_id: FloorId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub node_type: NodeType,
    /// Whether the node is offered as a start/end candidate in the UI.
    #[serde(default = "default_true")]
    pub is_selectable: bool,
    #[serde(default)]
    pub description: String,
    /// Target node for connector-typed nodes. The link is directed: only
    /// this node gains a virtual edge; two-way travel requires the target
    /// to declare the reverse link itself.
    #[serde(default)]
    pub connects_to_node_id: Option<NodeId>,
    #[serde(default)]
    pub connects_to_floor_id: Option<FloorId>,
    #[serde(default)]
    pub connects_to_building_id: Option<BuildingId>,
}

impl Node {
    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

/// An undirected walkable connection between two nodes on the same floor.
///
/// Edges are stored once; the search layer expands each into two directed
/// traversal arcs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from_node_id: NodeId,
    pub to_node_id: NodeId,
    /// Base weight, positive and conventionally proportional to physical
    /// distance in the floor's normalized coordinate space.
    pub weight: f64,
    /// Free-form label assigned by the map editor ("ramp" is cost-relevant).
    #[serde(default)]
    pub edge_type: Option<String>,
    #[serde(default)]
    pub is_stairs: bool,
    #[serde(default)]
    pub is_elevator: bool,
    #[serde(default = "default_true")]
    pub is_wheelchair_accessible: bool,
    #[serde(default)]
    pub is_restricted: bool,
    #[serde(default)]
    pub is_outdoor: bool,
    /// Congestion indicator, 0 = empty.
    #[serde(default)]
    pub crowd_level: u32,
    pub floor_id: FloorId,
}

/// One floor of a building, holding its own nodes and edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// One building of an institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

/// Immutable snapshot of one institution's navigation graph: an ordered
/// list of buildings, each an ordered list of floors.
///
/// Snapshots are supplied by the storage collaborator and are never
/// mutated by the routing engine; every routing call builds its own
/// lookup indexes from the snapshot it is handed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionGraph {
    pub buildings: Vec<Building>,
}

impl InstitutionGraph {
    /// Iterate over every node across all buildings and floors.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.buildings
            .iter()
            .flat_map(|building| building.floors.iter())
            .flat_map(|floor| floor.nodes.iter())
    }

    /// Iterate over every authored edge across all buildings and floors.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.buildings
            .iter()
            .flat_map(|building| building.floors.iter())
            .flat_map(|floor| floor.edges.iter())
    }

    /// Look up a node by identifier anywhere in the institution.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes().find(|node| node.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

fn default_true() -> bool {
    true
}
