//! Built-in criteria table.

use super::{DomainCriteria, MainCriterion, SubCriterion};

pub(super) const DOMAINS: &[DomainCriteria] = &[
    DomainCriteria {
        key: "IT",
        mains: &[
            MainCriterion {
                name: "1. 정보 시스템의 범위 및 이해",
                subs: &[
                    SubCriterion {
                        name: "1. 단말 및 서버 시스템",
                        details: &[
                            "PC 및 모바일 단말의 구성과 특성",
                            "서버 시스템의 구성과 특성",
                            "가상화 및 클라우드 환경의 이해",
                        ],
                    },
                    SubCriterion {
                        name: "2. 운영체제",
                        details: &[
                            "Windows 운영체제의 구조와 보안 설정",
                            "Unix/Linux 운영체제의 구조와 보안 설정",
                            "계정 및 권한 관리",
                            "로그 관리 및 감사",
                        ],
                    },
                    SubCriterion {
                        name: "3. 시스템 정보",
                        details: &[
                            "시스템 구성 정보 수집",
                            "프로세스 및 서비스 정보",
                            "파일 시스템 정보",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "2. 시스템 보안위협 및 공격기법",
                subs: &[
                    SubCriterion {
                        name: "1. 시스템 해킹",
                        details: &[
                            "버퍼 오버플로우",
                            "포맷 스트링",
                            "레이스 컨디션",
                            "백도어 및 루트킷",
                        ],
                    },
                    SubCriterion {
                        name: "2. 악성코드",
                        details: &[
                            "바이러스 및 웜",
                            "트로이목마 및 랜섬웨어",
                            "악성코드 분석 및 대응",
                        ],
                    },
                    SubCriterion {
                        name: "3. 인증 우회 및 권한 상승",
                        details: &[
                            "패스워드 크래킹",
                            "권한 상승 기법",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "3. 네트워크 보안",
                subs: &[
                    SubCriterion {
                        name: "1. 네트워크 프로토콜",
                        details: &[
                            "TCP/IP 프로토콜 구조",
                            "라우팅 및 스위칭",
                            "무선 네트워크 프로토콜",
                        ],
                    },
                    SubCriterion {
                        name: "2. 네트워크 공격기법",
                        details: &[
                            "스니핑 및 스푸핑",
                            "서비스 거부(DoS/DDoS) 공격",
                            "세션 하이재킹",
                        ],
                    },
                    SubCriterion {
                        name: "3. 네트워크 보안 장비",
                        details: &[
                            "방화벽",
                            "침입탐지/방지 시스템(IDS/IPS)",
                            "VPN",
                            "네트워크 접근제어(NAC)",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "4. 애플리케이션 보안",
                subs: &[
                    SubCriterion {
                        name: "1. 웹 애플리케이션 보안",
                        details: &[
                            "SQL 인젝션",
                            "크로스 사이트 스크립팅(XSS)",
                            "크로스 사이트 요청 위조(CSRF)",
                            "파일 업로드 및 다운로드 취약점",
                        ],
                    },
                    SubCriterion {
                        name: "2. 전자금융 애플리케이션 보안",
                        details: &[
                            "모바일 뱅킹 앱 보안",
                            "전자서명 및 인증서",
                            "간편결제 보안",
                        ],
                    },
                    SubCriterion {
                        name: "3. 시큐어 코딩",
                        details: &[
                            "입력값 검증",
                            "보안 기능 구현",
                            "에러 처리",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "5. 정보보호 기술",
                subs: &[
                    SubCriterion {
                        name: "1. 암호 기술",
                        details: &[
                            "대칭키 암호",
                            "공개키 암호",
                            "해시 함수 및 메시지 인증",
                            "전자서명",
                        ],
                    },
                    SubCriterion {
                        name: "2. 접근통제",
                        details: &[
                            "접근통제 모델",
                            "인증 기술",
                        ],
                    },
                    SubCriterion {
                        name: "3. 보안 관제 및 침해사고 대응",
                        details: &[],
                    },
                ],
            },
        ],
    },
    DomainCriteria {
        key: "일반",
        mains: &[
            MainCriterion {
                name: "1. 정보보호 개요",
                subs: &[
                    SubCriterion {
                        name: "1. 정보보호의 목표",
                        details: &[
                            "기밀성, 무결성, 가용성",
                            "인증, 부인방지, 책임추적성",
                        ],
                    },
                    SubCriterion {
                        name: "2. 보안 위험 관리",
                        details: &[
                            "위험 분석 및 평가",
                            "위험 처리 전략",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "2. 정보보호 관리체계",
                subs: &[
                    SubCriterion {
                        name: "1. 관리체계 수립 및 운영",
                        details: &[
                            "정보보호 정책 및 조직",
                            "자산 관리",
                            "교육 및 훈련",
                        ],
                    },
                    SubCriterion {
                        name: "2. 인증 제도",
                        details: &[
                            "ISMS-P 인증",
                            "ISO/IEC 27001",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "3. 금융보안 거버넌스",
                subs: &[
                    SubCriterion {
                        name: "1. 금융회사 정보보호 조직",
                        details: &[
                            "정보보호최고책임자(CISO)의 역할",
                            "정보보호위원회",
                        ],
                    },
                    SubCriterion {
                        name: "2. 업무 연속성 관리",
                        details: &[
                            "재해복구 계획",
                            "백업 및 복구 훈련",
                        ],
                    },
                    SubCriterion {
                        name: "3. 외부 주문 및 위탁 관리",
                        details: &[],
                    },
                ],
            },
        ],
    },
    DomainCriteria {
        key: "법률",
        mains: &[
            MainCriterion {
                name: "1. 전자금융거래법",
                subs: &[
                    SubCriterion {
                        name: "1. 총칙",
                        details: &[
                            "목적 및 정의",
                            "적용 범위",
                        ],
                    },
                    SubCriterion {
                        name: "2. 전자금융거래의 안전성 확보",
                        details: &[
                            "안전성 확보 의무",
                            "전자금융기반시설의 취약점 분석·평가",
                            "침해사고의 통지 및 대응",
                        ],
                    },
                    SubCriterion {
                        name: "3. 금융회사 및 전자금융업자의 책임",
                        details: &[
                            "이용자 손해배상 책임",
                            "접근매체의 관리",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "2. 전자금융감독규정",
                subs: &[
                    SubCriterion {
                        name: "1. 인력, 조직 및 예산",
                        details: &[
                            "정보보호 인력 비율",
                            "정보보호 예산 비율",
                        ],
                    },
                    SubCriterion {
                        name: "2. 정보기술부문 보안",
                        details: &[
                            "망분리",
                            "내부통제 및 접근권한 관리",
                            "전산자료 보호",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "3. 개인정보 보호법",
                subs: &[
                    SubCriterion {
                        name: "1. 개인정보의 처리",
                        details: &[
                            "수집·이용",
                            "제3자 제공",
                            "처리 위탁",
                        ],
                    },
                    SubCriterion {
                        name: "2. 안전조치 의무",
                        details: &[
                            "내부 관리계획",
                            "접근통제 및 암호화",
                        ],
                    },
                    SubCriterion {
                        name: "3. 정보주체의 권리",
                        details: &[
                            "열람·정정·삭제 요구",
                            "처리정지 요구",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "4. 신용정보의 이용 및 보호에 관한 법률",
                subs: &[
                    SubCriterion {
                        name: "1. 신용정보의 수집 및 처리",
                        details: &[
                            "수집 및 처리의 원칙",
                            "가명정보의 처리",
                        ],
                    },
                    SubCriterion {
                        name: "2. 신용정보주체의 보호",
                        details: &[],
                    },
                ],
            },
        ],
    },
    DomainCriteria {
        key: "동향",
        mains: &[
            MainCriterion {
                name: "1. 최신 보안위협 동향",
                subs: &[
                    SubCriterion {
                        name: "1. 금융권 사이버 공격 사례",
                        details: &[
                            "랜섬웨어 공격",
                            "공급망 공격",
                            "보이스피싱 및 스미싱",
                        ],
                    },
                    SubCriterion {
                        name: "2. 신종 공격 기법",
                        details: &[
                            "AI 기반 공격",
                            "딥페이크를 이용한 금융사기",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "2. 금융 IT 기술 동향",
                subs: &[
                    SubCriterion {
                        name: "1. 클라우드 및 망분리 규제 개선",
                        details: &[
                            "금융권 클라우드 이용 가이드",
                            "망분리 규제 합리화",
                        ],
                    },
                    SubCriterion {
                        name: "2. 디지털 금융 서비스",
                        details: &[
                            "오픈뱅킹 및 마이데이터",
                            "간편결제 및 간편송금",
                        ],
                    },
                    SubCriterion {
                        name: "3. 인공지능과 금융",
                        details: &[
                            "금융분야 AI 가이드라인",
                            "AI 모델 보안",
                        ],
                    },
                ],
            },
            MainCriterion {
                name: "3. 보안 정책 및 규제 동향",
                subs: &[
                    SubCriterion {
                        name: "1. 국내 정책 동향",
                        details: &[
                            "금융보안 규제 체계 개편",
                            "제로 트러스트 도입 가이드",
                        ],
                    },
                    SubCriterion {
                        name: "2. 해외 규제 동향",
                        details: &[
                            "EU 디지털 운영 복원력법(DORA)",
                            "미국 SEC 사이버보안 공시 규정",
                        ],
                    },
                ],
            },
        ],
    },
];
