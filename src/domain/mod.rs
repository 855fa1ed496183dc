//! Domain layer
//! 관리 API가 돌려주는 아티팩트 데이터를 외부 의존성 없이 표현한다.

pub mod artifact;
pub mod proxy;
