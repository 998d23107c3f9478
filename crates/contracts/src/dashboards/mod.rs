pub mod d400_care_overview;
