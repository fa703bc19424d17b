//! Synthetic southbound trip on the Gyeongbu expressway.
//!
//! Four straight legs from Pangyo towards Cheonan.  Marker weights rise
//! southwards, so a southbound trip resolves `DOWN` (하행) and Seoul-bound
//! rest areas should be filtered out.

use hp_core::Coordinate;

/// Route vertices, north to south.
pub fn route() -> Vec<Coordinate> {
    vec![
        Coordinate::new(127.100, 37.400),
        Coordinate::new(127.120, 37.200),
        Coordinate::new(127.150, 37.000),
        Coordinate::new(127.180, 36.800),
    ]
}

// Markers sit ~90 m east of each vertex.  영동선 has a single marker near the
// route and stays unresolved.
pub const MARKERS_CSV: &str = "\
id,name,road_name,lon,lat,weight\n\
1,판교JC,경부선,127.101,37.400,100\n\
2,수원신갈IC,경부선,127.121,37.200,120\n\
3,오산IC,경부선,127.151,37.000,140\n\
4,안성IC,경부선,127.181,36.800,160\n\
5,용인IC,영동선,127.1215,37.190,50\n\
";

// Paired rest areas on either side of the carriageway, ~180 m off the route.
pub const FACILITIES_CSV: &str = "\
id,name,road_name,lon,lat,direction\n\
1,기흥휴게소(서울방향),경부고속도로,127.112,37.300,서울방향\n\
2,기흥휴게소(부산방향),경부고속도로,127.108,37.300,부산방향\n\
3,용인휴게소,영동고속도로,127.137,37.100,상하행\n\
4,안성휴게소(부산방향),경부고속도로,127.167,36.900,하행\n\
5,안성휴게소(서울방향),경부고속도로,127.163,36.900,상행\n\
6,천안삼거리휴게소,경부고속도로,127.300,36.850,하행\n\
";
